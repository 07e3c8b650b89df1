pub mod book_catalog;
pub mod loan_ledger;
pub mod member_registry;

pub use book_catalog::BookCatalog;
pub use loan_ledger::LoanLedger;
pub use member_registry::MemberRegistry;
