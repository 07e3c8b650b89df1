pub mod catalog;
pub mod loan;
pub mod membership;

use crate::domain::LoanPolicy;
use crate::ports::*;
use std::sync::Arc;

/// サービスの依存関係
///
/// 3つの台帳（図書・会員・貸出）と貸出ルールをまとめたデータ構造。
/// 振る舞いは持たず、各サービス関数に参照で渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub books: Arc<dyn BookCatalog>,
    pub members: Arc<dyn MemberRegistry>,
    pub loans: Arc<dyn LoanLedger>,
    pub policy: LoanPolicy,
}
