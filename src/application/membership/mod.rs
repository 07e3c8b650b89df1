mod errors;
mod membership_service;

pub use errors::{MembershipError, Result};
pub use membership_service::{MemberSummary, add_member, find_member, list_members};
