use crate::domain::{Member, MemberId};
use crate::ports::member_registry::{MemberRegistry as MemberRegistryTrait, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::Mutex;

/// In-memory implementation of MemberRegistry
pub struct MemberRegistry {
    members: Mutex<IndexMap<MemberId, Member>>,
}

impl MemberRegistry {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(IndexMap::new()),
        }
    }
}

impl Default for MemberRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRegistryTrait for MemberRegistry {
    async fn insert(&self, member: Member) -> Result<bool> {
        let mut members = self.members.lock().await;
        if members.contains_key(&member.member_id) {
            return Ok(false);
        }
        members.insert(member.member_id.clone(), member);
        Ok(true)
    }

    async fn find(&self, member_id: &MemberId) -> Result<Option<Member>> {
        Ok(self.members.lock().await.get(member_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Member>> {
        Ok(self.members.lock().await.values().cloned().collect())
    }
}
