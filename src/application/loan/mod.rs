mod errors;
mod fines;
mod loan_queries;
mod loan_service;

pub use errors::{LoanApplicationError, Result};
pub use fines::{OverdueFine, calculate_fines};
pub use loan_queries::{BorrowedBook, MemberLoans, list_borrowed_books, show_member_borrowed_books};
pub use loan_service::{BorrowReceipt, ReturnReceipt, borrow_book, count_active_loans, return_book};
