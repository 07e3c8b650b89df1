use crate::domain::{BookId, MemberId};
use thiserror::Error;

/// 貸出管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum LoanApplicationError {
    /// 図書が存在しない
    #[error("Book '{0}' does not exist")]
    BookNotFound(BookId),

    /// 会員が存在しない
    #[error("Member '{0}' does not exist")]
    MemberNotFound(MemberId),

    /// 在庫切れ
    #[error("'{title}' has no copies available")]
    NoCopiesAvailable { title: String },

    /// 貸出上限を超えている
    #[error("Loan limit exceeded (max {max} books per member)")]
    LoanLimitExceeded { max: usize },

    /// 該当する貸出中の記録がない
    #[error("Member '{member_id}' has not borrowed book '{book_id}'")]
    NotBorrowed { book_id: BookId, member_id: MemberId },

    /// 貸出期間の設定により返却期限が日付の範囲外になる
    #[error("Due date is out of range for a loan period of {loan_period_days} days")]
    DueDateOutOfRange { loan_period_days: i64 },

    /// ドメイン層のエラー
    #[error("Domain error: {0}")]
    DomainError(String),

    /// BookCatalogのエラー
    #[error("Book catalog error")]
    BookCatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberRegistryのエラー
    #[error("Member registry error")]
    MemberRegistryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// LoanLedgerのエラー
    #[error("Loan ledger error")]
    LoanLedgerError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LoanApplicationError {
    /// ポート障害など、利用者の入力では解決できないエラーか
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            LoanApplicationError::DueDateOutOfRange { .. }
                | LoanApplicationError::DomainError(_)
                | LoanApplicationError::BookCatalogError(_)
                | LoanApplicationError::MemberRegistryError(_)
                | LoanApplicationError::LoanLedgerError(_)
        )
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LoanApplicationError>;
