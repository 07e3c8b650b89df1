use serde::{Deserialize, Serialize};

use super::MemberId;

/// 会員
///
/// 登録後は変更・削除されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub name: String,
}

impl Member {
    pub fn new(member_id: MemberId, name: impl Into<String>) -> Self {
        Self {
            member_id,
            name: name.into(),
        }
    }
}
