use crate::application::catalog::CatalogError;
use crate::application::loan::LoanApplicationError;
use crate::application::membership::MembershipError;
use thiserror::Error;

/// Errors surfaced by the menu session
#[derive(Debug, Error)]
pub enum CliError {
    /// A numeric field did not parse
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    /// An input line was not valid UTF-8
    #[error("input is not valid UTF-8 text")]
    InvalidText,

    /// Reading the next input line failed
    #[error("failed to read input")]
    Read(#[source] std::io::Error),

    /// Interrupt received while waiting for input
    #[error("input interrupted")]
    Interrupted,

    /// Input stream closed
    #[error("end of input")]
    EndOfInput,

    /// Writing to the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Membership(#[from] MembershipError),

    #[error(transparent)]
    Loan(#[from] LoanApplicationError),
}

impl CliError {
    /// Failures the user cannot fix by retrying with different input.
    pub fn is_unexpected(&self) -> bool {
        match self {
            CliError::Catalog(e) => e.is_internal(),
            CliError::Membership(e) => e.is_internal(),
            CliError::Loan(e) => e.is_internal(),
            CliError::Read(_) => true,
            CliError::InvalidNumber(_)
            | CliError::InvalidText
            | CliError::Interrupted
            | CliError::EndOfInput
            | CliError::Io(_) => false,
        }
    }
}
