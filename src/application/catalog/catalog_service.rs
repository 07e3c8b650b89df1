use crate::application::ServiceDependencies;
use crate::domain::{Book, BookId, commands::AddBook};

use super::errors::{CatalogError, Result};

/// 図書を登録する
///
/// 同じIDが既に存在する場合は DuplicateBook を返し、既存の記録は変更しない。
/// 新規図書の在庫数は総冊数と同じ。
pub async fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Result<Book> {
    let book = Book::new(cmd.book_id, cmd.title, cmd.author, cmd.copies);

    let inserted = deps
        .books
        .insert(book.clone())
        .await
        .map_err(CatalogError::BookCatalogError)?;

    if !inserted {
        tracing::warn!(book_id = %book.book_id, "duplicate book id rejected");
        return Err(CatalogError::DuplicateBook(book.book_id));
    }

    tracing::info!(
        book_id = %book.book_id,
        copies = book.total_copies(),
        "book added"
    );
    Ok(book)
}

pub async fn find_book(deps: &ServiceDependencies, book_id: &BookId) -> Result<Option<Book>> {
    deps.books
        .find(book_id)
        .await
        .map_err(CatalogError::BookCatalogError)
}

/// 登録順に全図書を返す
pub async fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.books
        .list()
        .await
        .map_err(CatalogError::BookCatalogError)
}

/// 図書を1件検索する。存在しなければ BookNotFound
pub async fn search_book(deps: &ServiceDependencies, book_id: &BookId) -> Result<Book> {
    tracing::debug!(%book_id, "searching book");
    find_book(deps, book_id)
        .await?
        .ok_or_else(|| CatalogError::BookNotFound(book_id.clone()))
}
