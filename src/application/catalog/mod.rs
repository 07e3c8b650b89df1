mod catalog_service;
mod errors;

pub use catalog_service::{add_book, find_book, list_books, search_book};
pub use errors::{CatalogError, Result};
