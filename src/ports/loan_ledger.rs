use crate::domain::{BookId, LoanRecord, MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出台帳ポート
///
/// 貸出記録は追記専用ログに保存され、削除されない。
/// 記録の順序（追記順）は保持される。
#[async_trait]
pub trait LoanLedger: Send + Sync {
    /// 貸出記録を末尾に追記する
    async fn append(&self, loan: LoanRecord) -> Result<()>;

    /// 既存の貸出記録を置き換える（返却による状態変更に使用）
    ///
    /// loan_id が一致する記録がない場合は false を返す。
    async fn save(&self, loan: LoanRecord) -> Result<bool>;

    /// 図書・会員が一致する貸出中の記録のうち、追記順で最初のものを取得する
    async fn find_first_active(
        &self,
        book_id: &BookId,
        member_id: &MemberId,
    ) -> Result<Option<LoanRecord>>;

    /// 貸出中の全記録を追記順に取得する
    async fn active_loans(&self) -> Result<Vec<LoanRecord>>;

    /// 会員の貸出中の記録を追記順に取得する
    ///
    /// 貸出上限（既定で会員ごと最大5冊）の確認に使用される。
    async fn active_loans_for_member(&self, member_id: &MemberId) -> Result<Vec<LoanRecord>>;

    /// 全記録（返却済みを含む）を追記順に取得する
    ///
    /// 業務処理では使わない。テストや監査で台帳全体を確認するためのもの。
    async fn history(&self) -> Result<Vec<LoanRecord>>;
}
