use crate::domain::{Book, BookId};
use crate::ports::book_catalog::{BookCatalog as BookCatalogTrait, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::Mutex;

/// In-memory implementation of BookCatalog
///
/// Books are keyed by id and kept in registration order.
pub struct BookCatalog {
    books: Mutex<IndexMap<BookId, Book>>,
}

impl BookCatalog {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(IndexMap::new()),
        }
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookCatalogTrait for BookCatalog {
    async fn insert(&self, book: Book) -> Result<bool> {
        let mut books = self.books.lock().await;
        if books.contains_key(&book.book_id) {
            return Ok(false);
        }
        books.insert(book.book_id.clone(), book);
        Ok(true)
    }

    async fn find(&self, book_id: &BookId) -> Result<Option<Book>> {
        Ok(self.books.lock().await.get(book_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Book>> {
        Ok(self.books.lock().await.values().cloned().collect())
    }

    /// Replaces the stored record in place, keeping its position.
    async fn save(&self, book: Book) -> Result<bool> {
        let mut books = self.books.lock().await;
        match books.get_mut(&book.book_id) {
            Some(existing) => {
                *existing = book;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_rejects_duplicate_and_keeps_original() {
        let catalog = BookCatalog::new();
        let original = Book::new(BookId::new("B1"), "Original", "Author", 1);
        let duplicate = Book::new(BookId::new("B1"), "Other", "Someone", 9);

        assert!(catalog.insert(original.clone()).await.unwrap());
        assert!(!catalog.insert(duplicate).await.unwrap());

        let stored = catalog.find(&BookId::new("B1")).await.unwrap();
        assert_eq!(stored, Some(original));
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let catalog = BookCatalog::new();
        for id in ["C", "A", "B"] {
            catalog
                .insert(Book::new(BookId::new(id), id, "Author", 1))
                .await
                .unwrap();
        }

        let ids: Vec<String> = catalog
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.book_id.to_string())
            .collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_save_unknown_book_returns_false() {
        let catalog = BookCatalog::new();
        let book = Book::new(BookId::new("B9"), "Title", "Author", 1);
        assert!(!catalog.save(book).await.unwrap());
        assert!(catalog.list().await.unwrap().is_empty());
    }
}
