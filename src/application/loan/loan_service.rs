use crate::application::ServiceDependencies;
use crate::domain::{
    self, BookId, BorrowError, LoanId, MemberId,
    commands::{BorrowBook, ReturnBook},
};
use chrono::NaiveDate;

use super::errors::{LoanApplicationError, Result};

/// 貸出完了時の控え
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowReceipt {
    pub loan_id: LoanId,
    pub book_title: String,
    pub member_name: String,
    pub borrowed_on: NaiveDate,
    pub due_date: NaiveDate,
}

/// 返却完了時の控え
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    pub loan_id: LoanId,
    pub book_title: String,
}

/// 会員の貸出中の冊数
pub async fn count_active_loans(deps: &ServiceDependencies, member_id: &MemberId) -> Result<usize> {
    let active = deps
        .loans
        .active_loans_for_member(member_id)
        .await
        .map_err(LoanApplicationError::LoanLedgerError)?;
    Ok(active.len())
}

/// 書籍を貸し出す
///
/// ビジネスルール（この順に判定し、最初の違反を返す）：
/// 1. 図書が存在すること
/// 2. 会員が存在すること
/// 3. 在庫が1冊以上あること
/// 4. 会員の貸出中の冊数が上限未満であること
///
/// 同じ会員・同じ図書の組で貸出中の記録が既にあっても拒否しない。
/// 判定を通過するまで状態は一切変更しない。
pub async fn borrow_book(deps: &ServiceDependencies, cmd: BorrowBook) -> Result<BorrowReceipt> {
    // 1. 図書の存在確認
    let book = lookup_book(deps, &cmd.book_id)
        .await?
        .ok_or_else(|| LoanApplicationError::BookNotFound(cmd.book_id.clone()))?;

    // 2. 会員の存在確認
    let member = lookup_member(deps, &cmd.member_id)
        .await?
        .ok_or_else(|| LoanApplicationError::MemberNotFound(cmd.member_id.clone()))?;

    // 3, 4. 在庫・貸出上限はドメイン層で判定
    let active_loans = count_active_loans(deps, &cmd.member_id).await?;
    let title = book.title.clone();

    let (book, loan) = domain::loan::borrow_book(
        book,
        cmd.member_id,
        active_loans,
        cmd.borrowed_on,
        &deps.policy,
    )
    .map_err(|e| {
        tracing::warn!(book_id = %cmd.book_id, member_id = %member.member_id, error = ?e, "borrow rejected");
        match e {
            BorrowError::NoCopiesAvailable => LoanApplicationError::NoCopiesAvailable {
                title: title.clone(),
            },
            BorrowError::LoanLimitExceeded { max } => {
                LoanApplicationError::LoanLimitExceeded { max }
            }
            BorrowError::DueDateOutOfRange => LoanApplicationError::DueDateOutOfRange {
                loan_period_days: deps.policy.loan_period_days,
            },
        }
    })?;

    let receipt = BorrowReceipt {
        loan_id: loan.loan_id,
        book_title: title,
        member_name: member.name,
        borrowed_on: loan.borrowed_on,
        due_date: loan.due_date,
    };

    deps.loans
        .append(loan)
        .await
        .map_err(LoanApplicationError::LoanLedgerError)?;

    deps.books
        .save(book)
        .await
        .map_err(LoanApplicationError::BookCatalogError)?;

    tracing::info!(
        loan_id = %receipt.loan_id.value(),
        book_id = %cmd.book_id,
        due_date = %receipt.due_date,
        "book borrowed"
    );
    Ok(receipt)
}

/// 書籍を返却する
///
/// 図書・会員が一致する貸出中の記録のうち、追記順で最初のものを返却済みにする。
/// 該当がなければ NotBorrowed。
///
/// 記録を返却済みにした後で図書を取得し直す。図書が見つからない場合は
/// BookNotFound を返すが、記録は返却済みのまま在庫は戻らない。
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<ReturnReceipt> {
    // 1. 貸出中の記録を検索
    let loan = deps
        .loans
        .find_first_active(&cmd.book_id, &cmd.member_id)
        .await
        .map_err(LoanApplicationError::LoanLedgerError)?
        .ok_or_else(|| {
            tracing::warn!(book_id = %cmd.book_id, member_id = %cmd.member_id, "no active loan to return");
            LoanApplicationError::NotBorrowed {
                book_id: cmd.book_id.clone(),
                member_id: cmd.member_id.clone(),
            }
        })?;

    // 2. 記録を返却済みにする
    let returned = domain::loan::return_book(loan)
        .map_err(|e| LoanApplicationError::DomainError(format!("{:?}", e)))?;
    let loan_id = returned.loan_id;

    deps.loans
        .save(returned)
        .await
        .map_err(LoanApplicationError::LoanLedgerError)?;

    // 3. 在庫を戻す
    let book = lookup_book(deps, &cmd.book_id)
        .await?
        .ok_or_else(|| LoanApplicationError::BookNotFound(cmd.book_id.clone()))?;
    let title = book.title.clone();

    let book = domain::book::check_in(book)
        .map_err(|e| LoanApplicationError::DomainError(format!("{:?}", e)))?;

    deps.books
        .save(book)
        .await
        .map_err(LoanApplicationError::BookCatalogError)?;

    tracing::info!(loan_id = %loan_id.value(), book_id = %cmd.book_id, "book returned");
    Ok(ReturnReceipt {
        loan_id,
        book_title: title,
    })
}

/// 図書の取得（貸出・返却・照会で共通利用）
pub(super) async fn lookup_book(
    deps: &ServiceDependencies,
    book_id: &BookId,
) -> Result<Option<domain::Book>> {
    deps.books
        .find(book_id)
        .await
        .map_err(LoanApplicationError::BookCatalogError)
}

pub(super) async fn lookup_member(
    deps: &ServiceDependencies,
    member_id: &MemberId,
) -> Result<Option<domain::Member>> {
    deps.members
        .find(member_id)
        .await
        .map_err(LoanApplicationError::MemberRegistryError)
}
