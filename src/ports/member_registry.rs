use crate::domain::{Member, MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員名簿ポート
#[async_trait]
pub trait MemberRegistry: Send + Sync {
    /// 会員を登録する
    ///
    /// 既に同じIDが存在する場合は何も変更せず false を返す。
    async fn insert(&self, member: Member) -> Result<bool>;

    /// IDで会員を取得する
    async fn find(&self, member_id: &MemberId) -> Result<Option<Member>>;

    /// 登録順に全会員を取得する
    async fn list(&self) -> Result<Vec<Member>>;
}
