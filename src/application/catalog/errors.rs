use crate::domain::BookId;
use thiserror::Error;

/// 図書管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 同じIDの図書が既に登録されている
    #[error("A book with ID '{0}' already exists")]
    DuplicateBook(BookId),

    /// 図書が存在しない
    #[error("Book '{0}' does not exist")]
    BookNotFound(BookId),

    /// BookCatalogのエラー
    #[error("Book catalog error")]
    BookCatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    /// ポート障害など、利用者の入力では解決できないエラーか
    pub fn is_internal(&self) -> bool {
        matches!(self, CatalogError::BookCatalogError(_))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
