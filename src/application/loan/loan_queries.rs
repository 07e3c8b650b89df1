use crate::application::ServiceDependencies;
use crate::domain::{Book, LoanRecord, Member, MemberId};

use super::errors::{LoanApplicationError, Result};
use super::loan_service::{lookup_book, lookup_member};

/// 貸出中一覧の1行（図書・会員の情報を結合したもの）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowedBook {
    pub loan: LoanRecord,
    pub book: Book,
    pub member: Member,
}

/// 会員の貸出状況
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberLoans {
    pub member: Member,
    pub loans: Vec<(LoanRecord, Book)>,
}

/// 貸出中の全記録を追記順に返す
///
/// 図書または会員が見つからない記録は黙って読み飛ばす。
pub async fn list_borrowed_books(deps: &ServiceDependencies) -> Result<Vec<BorrowedBook>> {
    let active = deps
        .loans
        .active_loans()
        .await
        .map_err(LoanApplicationError::LoanLedgerError)?;

    let mut rows = Vec::with_capacity(active.len());
    for loan in active {
        let book = lookup_book(deps, &loan.book_id).await?;
        let member = lookup_member(deps, &loan.member_id).await?;
        if let (Some(book), Some(member)) = (book, member) {
            rows.push(BorrowedBook { loan, book, member });
        }
    }

    Ok(rows)
}

/// 会員が借りている図書を返す
///
/// 会員が存在しなければ MemberNotFound。図書が見つからない記録は読み飛ばす。
pub async fn show_member_borrowed_books(
    deps: &ServiceDependencies,
    member_id: &MemberId,
) -> Result<MemberLoans> {
    let member = lookup_member(deps, member_id)
        .await?
        .ok_or_else(|| LoanApplicationError::MemberNotFound(member_id.clone()))?;

    let active = deps
        .loans
        .active_loans_for_member(member_id)
        .await
        .map_err(LoanApplicationError::LoanLedgerError)?;

    let mut loans = Vec::with_capacity(active.len());
    for loan in active {
        if let Some(book) = lookup_book(deps, &loan.book_id).await? {
            loans.push((loan, book));
        }
    }

    Ok(MemberLoans { member, loans })
}
