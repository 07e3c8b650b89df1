use crate::domain::{BookId, LoanRecord, MemberId};
use crate::ports::loan_ledger::{LoanLedger as LoanLedgerTrait, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// In-memory implementation of LoanLedger
///
/// Records live in a single append-only vector; lookups are linear scans
/// in storage order.
pub struct LoanLedger {
    loans: Mutex<Vec<LoanRecord>>,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self {
            loans: Mutex::new(Vec::new()),
        }
    }
}

impl Default for LoanLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoanLedgerTrait for LoanLedger {
    async fn append(&self, loan: LoanRecord) -> Result<()> {
        self.loans.lock().await.push(loan);
        Ok(())
    }

    async fn save(&self, loan: LoanRecord) -> Result<bool> {
        let mut loans = self.loans.lock().await;
        match loans.iter_mut().find(|l| l.loan_id == loan.loan_id) {
            Some(existing) => {
                *existing = loan;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_first_active(
        &self,
        book_id: &BookId,
        member_id: &MemberId,
    ) -> Result<Option<LoanRecord>> {
        let loans = self.loans.lock().await;
        Ok(loans
            .iter()
            .find(|l| &l.book_id == book_id && &l.member_id == member_id && l.status.is_active())
            .cloned())
    }

    async fn active_loans(&self) -> Result<Vec<LoanRecord>> {
        let loans = self.loans.lock().await;
        Ok(loans.iter().filter(|l| l.status.is_active()).cloned().collect())
    }

    async fn active_loans_for_member(&self, member_id: &MemberId) -> Result<Vec<LoanRecord>> {
        let loans = self.loans.lock().await;
        Ok(loans
            .iter()
            .filter(|l| &l.member_id == member_id && l.status.is_active())
            .cloned()
            .collect())
    }

    async fn history(&self) -> Result<Vec<LoanRecord>> {
        Ok(self.loans.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LoanId, LoanStatus};
    use chrono::NaiveDate;

    fn record(book: &str, member: &str, status: LoanStatus) -> LoanRecord {
        let borrowed_on = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        LoanRecord {
            loan_id: LoanId::new(),
            book_id: BookId::new(book),
            member_id: MemberId::new(member),
            borrowed_on,
            due_date: borrowed_on,
            status,
        }
    }

    #[tokio::test]
    async fn test_find_first_active_skips_returned_and_respects_order() {
        let ledger = LoanLedger::new();
        let returned = record("B1", "M1", LoanStatus::Returned);
        let first = record("B1", "M1", LoanStatus::Active);
        let second = record("B1", "M1", LoanStatus::Active);

        ledger.append(returned).await.unwrap();
        ledger.append(first.clone()).await.unwrap();
        ledger.append(second).await.unwrap();

        let found = ledger
            .find_first_active(&BookId::new("B1"), &MemberId::new("M1"))
            .await
            .unwrap();
        assert_eq!(found.map(|l| l.loan_id), Some(first.loan_id));
    }

    #[tokio::test]
    async fn test_save_replaces_matching_record_only() {
        let ledger = LoanLedger::new();
        let a = record("B1", "M1", LoanStatus::Active);
        let b = record("B2", "M1", LoanStatus::Active);
        ledger.append(a.clone()).await.unwrap();
        ledger.append(b.clone()).await.unwrap();

        let returned = LoanRecord {
            status: LoanStatus::Returned,
            ..a
        };
        assert!(ledger.save(returned).await.unwrap());

        let active = ledger
            .active_loans_for_member(&MemberId::new("M1"))
            .await
            .unwrap();
        assert_eq!(active, vec![b]);
        assert_eq!(ledger.history().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_save_unknown_record_returns_false() {
        let ledger = LoanLedger::new();
        let loan = record("B1", "M1", LoanStatus::Active);
        assert!(!ledger.save(loan).await.unwrap());
        assert!(ledger.history().await.unwrap().is_empty());
    }
}
