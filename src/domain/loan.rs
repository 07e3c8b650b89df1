use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use super::book::{self, Book};
use super::{BookId, BorrowError, LoanId, MemberId, ReturnError};

/// 会員1人あたりの最大貸出冊数
pub const MAX_ACTIVE_LOANS: usize = 5;

/// 貸出期間（日数）
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// 1日あたりの延滞料金
pub const FINE_PER_DAY: u64 = 100;

/// 設定可能な貸出期間の上限（日数）
pub const MAX_LOAN_PERIOD_DAYS: i64 = 36_500;

/// 設定可能な1日あたりの延滞料金の上限
pub const MAX_FINE_PER_DAY: u64 = 1_000_000_000;

/// 貸出ルール
///
/// 既定値は上記の定数。設定ファイル・環境変数で上書きできる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPolicy {
    pub max_active_loans: usize,
    pub loan_period_days: i64,
    pub fine_per_day: u64,
}

impl LoanPolicy {
    /// 貸出日から返却期限を求める
    ///
    /// 日付の表現範囲を超える場合は None。
    pub fn due_date(&self, borrowed_on: NaiveDate) -> Option<NaiveDate> {
        TimeDelta::try_days(self.loan_period_days)
            .and_then(|period| borrowed_on.checked_add_signed(period))
    }

    /// 延滞日数に対する延滞料金（上限で飽和する）
    pub fn fine_for(&self, overdue_days: i64) -> u64 {
        u64::try_from(overdue_days)
            .unwrap_or(0)
            .saturating_mul(self.fine_per_day)
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            max_active_loans: MAX_ACTIVE_LOANS,
            loan_period_days: LOAN_PERIOD_DAYS,
            fine_per_day: FINE_PER_DAY,
        }
    }
}

/// 貸出状態
///
/// 遷移は Active → Returned の一方向のみ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// 貸出中
    Active,
    /// 返却済み
    Returned,
}

impl LoanStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, LoanStatus::Active)
    }

    pub fn is_returned(&self) -> bool {
        matches!(self, LoanStatus::Returned)
    }
}

/// 貸出記録 - 1冊の書籍の1回の貸出
///
/// 記録は追記のみで、削除・再利用されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub loan_id: LoanId,

    // 他の集約への参照（IDのみ）
    pub book_id: BookId,
    pub member_id: MemberId,

    pub borrowed_on: NaiveDate,
    pub due_date: NaiveDate,
    pub status: LoanStatus,
}

/// 延滞料金の算定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fine {
    pub overdue_days: i64,
    pub amount: u64,
}

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール（この順に判定）：
/// - 在庫が1冊以上あること
/// - 会員の貸出中の冊数が上限未満であること
/// - 返却期限が日付として表現できること
///
/// 同じ会員が同じ書籍を重複して借りることは禁止しない。
///
/// 副作用なし。在庫を減らしたBookと新しい貸出記録を返す。
pub fn borrow_book(
    book: Book,
    member_id: MemberId,
    active_loans: usize,
    borrowed_on: NaiveDate,
    policy: &LoanPolicy,
) -> Result<(Book, LoanRecord), BorrowError> {
    if !book.is_available() {
        return Err(BorrowError::NoCopiesAvailable);
    }

    if active_loans >= policy.max_active_loans {
        return Err(BorrowError::LoanLimitExceeded {
            max: policy.max_active_loans,
        });
    }

    let due_date = policy
        .due_date(borrowed_on)
        .ok_or(BorrowError::DueDateOutOfRange)?;

    let book = book::check_out(book)?;

    let loan = LoanRecord {
        loan_id: LoanId::new(),
        book_id: book.book_id.clone(),
        member_id,
        borrowed_on,
        due_date,
        status: LoanStatus::Active,
    };

    Ok((book, loan))
}

/// 純粋関数：書籍を返却する
///
/// ビジネスルール：
/// - 延滞していても返却は受け付ける
/// - 延滞料金の支払いは記録しない
pub fn return_book(loan: LoanRecord) -> Result<LoanRecord, ReturnError> {
    if loan.status.is_returned() {
        return Err(ReturnError::AlreadyReturned);
    }

    Ok(LoanRecord {
        status: LoanStatus::Returned,
        ..loan
    })
}

/// 純粋関数：延滞日数
///
/// 返却済み、または返却期限内なら0。
pub fn overdue_days(loan: &LoanRecord, today: NaiveDate) -> i64 {
    if loan.status.is_returned() {
        return 0;
    }
    (today - loan.due_date).num_days().max(0)
}

/// 純粋関数：延滞料金の算定
///
/// 延滞していない貸出には None を返す。
pub fn assess_fine(loan: &LoanRecord, today: NaiveDate, policy: &LoanPolicy) -> Option<Fine> {
    let overdue_days = overdue_days(loan, today);
    if overdue_days == 0 {
        return None;
    }

    Some(Fine {
        overdue_days,
        amount: policy.fine_for(overdue_days),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_book(copies: u32) -> Book {
        Book::new(BookId::new("B1"), "Title", "Author", copies)
    }

    #[test]
    fn test_borrow_book_success() {
        let policy = LoanPolicy::default();
        let borrowed_on = date(2026, 10, 1);

        let (book, loan) =
            borrow_book(sample_book(2), MemberId::new("M1"), 0, borrowed_on, &policy).unwrap();

        assert_eq!(book.available_copies(), 1);
        assert_eq!(loan.book_id, BookId::new("B1"));
        assert_eq!(loan.member_id, MemberId::new("M1"));
        assert_eq!(loan.borrowed_on, borrowed_on);
        // 返却期限は貸出日 + 14日間
        assert_eq!(loan.due_date, date(2026, 10, 15));
        assert_eq!(loan.status, LoanStatus::Active);
    }

    #[test]
    fn test_borrow_book_fails_when_no_copies() {
        let policy = LoanPolicy::default();
        let result = borrow_book(sample_book(0), MemberId::new("M1"), 0, date(2026, 1, 1), &policy);
        assert_eq!(result.unwrap_err(), BorrowError::NoCopiesAvailable);
    }

    #[test]
    fn test_borrow_book_fails_at_loan_limit() {
        let policy = LoanPolicy::default();
        let result = borrow_book(
            sample_book(1),
            MemberId::new("M1"),
            MAX_ACTIVE_LOANS,
            date(2026, 1, 1),
            &policy,
        );
        assert_eq!(
            result.unwrap_err(),
            BorrowError::LoanLimitExceeded { max: 5 }
        );
    }

    #[test]
    fn test_borrow_book_checks_copies_before_limit() {
        let policy = LoanPolicy::default();
        let result = borrow_book(sample_book(0), MemberId::new("M1"), 99, date(2026, 1, 1), &policy);
        assert_eq!(result.unwrap_err(), BorrowError::NoCopiesAvailable);
    }

    #[test]
    fn test_borrow_book_uses_custom_period() {
        let policy = LoanPolicy {
            loan_period_days: 7,
            ..LoanPolicy::default()
        };
        let (_, loan) =
            borrow_book(sample_book(1), MemberId::new("M1"), 0, date(2026, 2, 25), &policy)
                .unwrap();
        assert_eq!(loan.due_date, date(2026, 3, 4));
    }

    #[test]
    fn test_return_book_success() {
        let policy = LoanPolicy::default();
        let (_, loan) =
            borrow_book(sample_book(1), MemberId::new("M1"), 0, date(2026, 1, 1), &policy)
                .unwrap();

        let returned = return_book(loan.clone()).unwrap();
        assert_eq!(returned.status, LoanStatus::Returned);
        assert_eq!(returned.loan_id, loan.loan_id);
        assert_eq!(returned.due_date, loan.due_date);
    }

    #[test]
    fn test_return_book_fails_when_already_returned() {
        let policy = LoanPolicy::default();
        let (_, loan) =
            borrow_book(sample_book(1), MemberId::new("M1"), 0, date(2026, 1, 1), &policy)
                .unwrap();
        let returned = return_book(loan).unwrap();

        // 2回目の返却は失敗
        assert_eq!(
            return_book(returned).unwrap_err(),
            ReturnError::AlreadyReturned
        );
    }

    #[rstest]
    #[case::due_in_future(0, 0)]
    #[case::due_today(14, 0)]
    #[case::one_day_late(15, 1)]
    #[case::twenty_days_after_borrow(20, 6)]
    fn test_overdue_days(#[case] days_since_borrow: i64, #[case] expected: i64) {
        let policy = LoanPolicy::default();
        let borrowed_on = date(2026, 5, 1);
        let (_, loan) =
            borrow_book(sample_book(1), MemberId::new("M1"), 0, borrowed_on, &policy).unwrap();

        let today = borrowed_on + TimeDelta::days(days_since_borrow);
        assert_eq!(overdue_days(&loan, today), expected);
    }

    #[test]
    fn test_overdue_days_zero_once_returned() {
        let policy = LoanPolicy::default();
        let borrowed_on = date(2026, 5, 1);
        let (_, loan) =
            borrow_book(sample_book(1), MemberId::new("M1"), 0, borrowed_on, &policy).unwrap();
        let loan = return_book(loan).unwrap();

        assert_eq!(overdue_days(&loan, borrowed_on + TimeDelta::days(40)), 0);
    }

    #[test]
    fn test_assess_fine_twenty_days_after_borrow() {
        let policy = LoanPolicy::default();
        let borrowed_on = date(2026, 5, 1);
        let (_, loan) =
            borrow_book(sample_book(1), MemberId::new("M1"), 0, borrowed_on, &policy).unwrap();

        let fine = assess_fine(&loan, borrowed_on + TimeDelta::days(20), &policy).unwrap();
        assert_eq!(fine.overdue_days, 6);
        assert_eq!(fine.amount, 600);
    }

    #[test]
    fn test_assess_fine_none_before_due_date() {
        let policy = LoanPolicy::default();
        let borrowed_on = date(2026, 5, 1);
        let (_, loan) =
            borrow_book(sample_book(1), MemberId::new("M1"), 0, borrowed_on, &policy).unwrap();

        assert!(assess_fine(&loan, borrowed_on + TimeDelta::days(3), &policy).is_none());
    }

    #[test]
    fn test_fine_for_ignores_negative_days() {
        let policy = LoanPolicy::default();
        assert_eq!(policy.fine_for(-3), 0);
        assert_eq!(policy.fine_for(2), 200);
    }

    #[test]
    fn test_fine_for_saturates_instead_of_overflowing() {
        let policy = LoanPolicy {
            fine_per_day: 10_000_000_000_000_000_000,
            ..LoanPolicy::default()
        };
        assert_eq!(policy.fine_for(16), u64::MAX);
    }

    #[test]
    fn test_borrow_book_rejects_unrepresentable_due_date() {
        let policy = LoanPolicy {
            loan_period_days: 200_000_000,
            ..LoanPolicy::default()
        };
        let book = sample_book(1);

        let result = borrow_book(book, MemberId::new("M1"), 0, date(2026, 1, 1), &policy);
        assert_eq!(result.unwrap_err(), BorrowError::DueDateOutOfRange);
    }

    #[test]
    fn test_due_date_at_end_of_calendar() {
        let policy = LoanPolicy::default();
        assert_eq!(policy.due_date(NaiveDate::MAX), None);
        assert_eq!(policy.due_date(date(2026, 10, 19)), Some(date(2026, 11, 2)));
    }
}
