use serde::{Deserialize, Serialize};

use super::{BookId, CopiesError};

/// 図書
///
/// 不変条件：0 <= available_copies <= total_copies
/// フィールドを非公開にし、在庫の増減は check_out / check_in 経由に限定する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    total_copies: u32,
    available_copies: u32,
}

impl Book {
    /// 新規登録（全冊が在庫にある状態）
    pub fn new(
        book_id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        copies: u32,
    ) -> Self {
        Self {
            book_id,
            title: title.into(),
            author: author.into(),
            total_copies: copies,
            available_copies: copies,
        }
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

/// 純粋関数：1冊を貸出に回す
///
/// 副作用なし。在庫を1減らした新しいBookを返す。
pub fn check_out(book: Book) -> Result<Book, CopiesError> {
    if !book.is_available() {
        return Err(CopiesError::NoCopiesAvailable);
    }

    Ok(Book {
        available_copies: book.available_copies - 1,
        ..book
    })
}

/// 純粋関数：1冊を在庫に戻す
///
/// 副作用なし。在庫を1増やした新しいBookを返す。
pub fn check_in(book: Book) -> Result<Book, CopiesError> {
    if book.available_copies >= book.total_copies {
        return Err(CopiesError::AllCopiesOnShelf);
    }

    Ok(Book {
        available_copies: book.available_copies + 1,
        ..book
    })
}
