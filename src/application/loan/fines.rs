use crate::application::ServiceDependencies;
use crate::domain::{self, Fine};
use chrono::NaiveDate;

use super::errors::Result;
use super::loan_queries::{BorrowedBook, list_borrowed_books};

/// 延滞料金一覧の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueFine {
    pub borrowed: BorrowedBook,
    pub fine: Fine,
}

/// 延滞料金を計算する（読み取り専用）
///
/// 貸出中の記録それぞれについて延滞日数 = max(0, today - 返却期限) を求め、
/// 延滞日数が1日以上のものだけを返す。図書・会員が見つからない記録は対象外。
///
/// 状態は変更しない。支払いの記録も行わない。
pub async fn calculate_fines(
    deps: &ServiceDependencies,
    today: NaiveDate,
) -> Result<Vec<OverdueFine>> {
    let borrowed = list_borrowed_books(deps).await?;

    let fines: Vec<OverdueFine> = borrowed
        .into_iter()
        .filter_map(|borrowed| {
            domain::loan::assess_fine(&borrowed.loan, today, &deps.policy)
                .map(|fine| OverdueFine { borrowed, fine })
        })
        .collect();

    tracing::debug!(%today, overdue = fines.len(), "fines calculated");
    Ok(fines)
}
