//! Text formatting for the menu session. Dates are rendered as `YYYY-MM-DD` here
//! and nowhere else.

use chrono::NaiveDate;

use crate::application::loan::{BorrowReceipt, BorrowedBook, OverdueFine, ReturnReceipt};
use crate::application::membership::MemberSummary;
use crate::domain::{Book, LoanRecord, Member};

use super::menu::MenuChoice;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const RULE: &str = "==================================================";

pub fn date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

pub fn menu() -> String {
    let mut text = format!("\n{RULE}\nLibrary Catalog Menu\n{RULE}\n");
    for choice in MenuChoice::ALL {
        text.push_str(&format!("{}: {}\n", choice.number(), choice.label()));
    }
    text.push_str(RULE);
    text
}

pub fn book(book: &Book) -> String {
    format!(
        "ID: {}, Title: {}, Author: {}, Copies: {}, Available: {}",
        book.book_id,
        book.title,
        book.author,
        book.total_copies(),
        book.available_copies()
    )
}

pub fn book_added(book: &Book) -> String {
    format!(
        "Added book '{}' (ID: {}, Author: {}, Copies: {}).",
        book.title,
        book.book_id,
        book.author,
        book.total_copies()
    )
}

pub fn member_added(member: &Member) -> String {
    format!("Added member '{}' (ID: {}).", member.name, member.member_id)
}

pub fn member_summary(summary: &MemberSummary) -> String {
    format!(
        "ID: {}, Name: {}, Borrowed: {}",
        summary.member.member_id, summary.member.name, summary.active_loans
    )
}

pub fn borrow_receipt(receipt: &BorrowReceipt) -> String {
    format!(
        "Lent '{}' to member '{}'.\nDue date: {}",
        receipt.book_title,
        receipt.member_name,
        date(receipt.due_date)
    )
}

pub fn return_receipt(receipt: &ReturnReceipt) -> String {
    format!("'{}' has been returned.", receipt.book_title)
}

pub fn borrowed_book(row: &BorrowedBook) -> String {
    format!(
        "Book: {} (ID: {}), Member: {} (ID: {}), Borrowed: {}, Due: {}",
        row.book.title,
        row.loan.book_id,
        row.member.name,
        row.loan.member_id,
        date(row.loan.borrowed_on),
        date(row.loan.due_date)
    )
}

pub fn member_loan(loan: &LoanRecord, book: &Book) -> String {
    format!(
        "Book: {} (ID: {}), Author: {}, Borrowed: {}, Due: {}",
        book.title,
        loan.book_id,
        book.author,
        date(loan.borrowed_on),
        date(loan.due_date)
    )
}

pub fn overdue_fine(row: &OverdueFine) -> String {
    format!(
        "Book: {} (ID: {}), Member: {} (ID: {}), Overdue: {} day(s), Fine: {}",
        row.borrowed.book.title,
        row.borrowed.loan.book_id,
        row.borrowed.member.name,
        row.borrowed.loan.member_id,
        row.fine.overdue_days,
        row.fine.amount
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookId, Fine, LoanId, LoanStatus, MemberId};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_date_is_zero_padded() {
        assert_eq!(date(d(2026, 3, 4)), "2026-03-04");
    }

    #[test]
    fn test_menu_lists_all_eleven_choices() {
        let text = menu();
        assert!(text.contains("1: Add a book"));
        assert!(text.contains("10: Show a member's borrowed books"));
        assert!(text.contains("11: Exit"));
    }

    #[test]
    fn test_overdue_fine_line() {
        let row = OverdueFine {
            borrowed: BorrowedBook {
                loan: LoanRecord {
                    loan_id: LoanId::new(),
                    book_id: BookId::new("B1"),
                    member_id: MemberId::new("M1"),
                    borrowed_on: d(2026, 1, 1),
                    due_date: d(2026, 1, 15),
                    status: LoanStatus::Active,
                },
                book: Book::new(BookId::new("B1"), "Dune", "Herbert", 1),
                member: Member::new(MemberId::new("M1"), "Alice"),
            },
            fine: Fine {
                overdue_days: 6,
                amount: 600,
            },
        };

        assert_eq!(
            overdue_fine(&row),
            "Book: Dune (ID: B1), Member: Alice (ID: M1), Overdue: 6 day(s), Fine: 600"
        );
    }
}
