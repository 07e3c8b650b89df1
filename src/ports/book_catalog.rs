use crate::domain::{Book, BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 図書目録ポート
///
/// 図書IDをキーに図書を保持する。一覧は登録順で返すこと。
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// 図書を登録する
    ///
    /// 既に同じIDが存在する場合は何も変更せず false を返す。
    async fn insert(&self, book: Book) -> Result<bool>;

    /// IDで図書を取得する
    async fn find(&self, book_id: &BookId) -> Result<Option<Book>>;

    /// 登録順に全図書を取得する
    async fn list(&self) -> Result<Vec<Book>>;

    /// 既存の図書を更新する（在庫数の変更に使用）
    ///
    /// 登録されていないIDの場合は false を返す。
    async fn save(&self, book: Book) -> Result<bool>;
}
