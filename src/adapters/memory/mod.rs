pub mod book_catalog;
pub mod loan_ledger;
pub mod member_registry;

pub use book_catalog::BookCatalog;
pub use loan_ledger::LoanLedger;
pub use member_registry::MemberRegistry;

use crate::application::ServiceDependencies;
use crate::domain::LoanPolicy;
use std::sync::Arc;

/// Wire the in-memory adapters into a fresh, empty store.
pub fn service_dependencies(policy: LoanPolicy) -> ServiceDependencies {
    ServiceDependencies {
        books: Arc::new(BookCatalog::new()),
        members: Arc::new(MemberRegistry::new()),
        loans: Arc::new(LoanLedger::new()),
        policy,
    }
}
