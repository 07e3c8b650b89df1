use crate::application::ServiceDependencies;
use crate::domain::{Member, MemberId, commands::AddMember};

use super::errors::{MembershipError, Result};

/// 会員一覧の1行
///
/// active_loans は保存値ではなく、貸出台帳から都度数える派生値。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSummary {
    pub member: Member,
    pub active_loans: usize,
}

/// 会員を登録する
///
/// 同じIDが既に存在する場合は DuplicateMember を返す。
pub async fn add_member(deps: &ServiceDependencies, cmd: AddMember) -> Result<Member> {
    let member = Member::new(cmd.member_id, cmd.name);

    let inserted = deps
        .members
        .insert(member.clone())
        .await
        .map_err(MembershipError::MemberRegistryError)?;

    if !inserted {
        tracing::warn!(member_id = %member.member_id, "duplicate member id rejected");
        return Err(MembershipError::DuplicateMember(member.member_id));
    }

    tracing::info!(member_id = %member.member_id, "member added");
    Ok(member)
}

pub async fn find_member(
    deps: &ServiceDependencies,
    member_id: &MemberId,
) -> Result<Option<Member>> {
    deps.members
        .find(member_id)
        .await
        .map_err(MembershipError::MemberRegistryError)
}

/// 登録順に全会員と、それぞれの貸出中冊数を返す
pub async fn list_members(deps: &ServiceDependencies) -> Result<Vec<MemberSummary>> {
    let members = deps
        .members
        .list()
        .await
        .map_err(MembershipError::MemberRegistryError)?;

    let mut summaries = Vec::with_capacity(members.len());
    for member in members {
        let active_loans = deps
            .loans
            .active_loans_for_member(&member.member_id)
            .await
            .map_err(MembershipError::LoanLedgerError)?
            .len();
        summaries.push(MemberSummary {
            member,
            active_loans,
        });
    }

    Ok(summaries)
}
