use crate::domain::MemberId;
use thiserror::Error;

/// 会員管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum MembershipError {
    /// 同じIDの会員が既に登録されている
    #[error("A member with ID '{0}' already exists")]
    DuplicateMember(MemberId),

    /// MemberRegistryのエラー
    #[error("Member registry error")]
    MemberRegistryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// LoanLedgerのエラー
    #[error("Loan ledger error")]
    LoanLedgerError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl MembershipError {
    pub fn is_internal(&self) -> bool {
        !matches!(self, MembershipError::DuplicateMember(_))
    }
}

pub type Result<T> = std::result::Result<T, MembershipError>;
