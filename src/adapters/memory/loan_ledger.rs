use crate::domain::{
    Loan,
    loan::{close_loan, open_loan},
    value_objects::{BookId, LoanId, MemberId},
};
use crate::ports::{
    errors::{Result, StoreError},
    id_generator::IdGenerator,
    loan_ledger::LoanLedger as LoanLedgerTrait,
};
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// LoanLedgerのインメモリ実装
///
/// 全貸出を作成順に保持し、書籍ごとの有効な貸出を索引で引けるようにする。
pub struct LoanLedger {
    ids: Arc<dyn IdGenerator>,
    loans: IndexMap<LoanId, Loan>,
    // 書籍ID -> 有効な貸出ID
    active_by_book: HashMap<BookId, LoanId>,
}

impl LoanLedger {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            loans: IndexMap::new(),
            active_by_book: HashMap::new(),
        }
    }
}

impl LoanLedgerTrait for LoanLedger {
    fn open(
        &mut self,
        book_id: BookId,
        member_id: MemberId,
        borrowed_date: NaiveDate,
        due_date: NaiveDate,
    ) -> LoanId {
        let loan_id = self.ids.next_loan_id();
        let loan = open_loan(
            loan_id.clone(),
            book_id.clone(),
            member_id,
            borrowed_date,
            due_date,
        );
        self.loans.insert(loan_id.clone(), loan);
        self.active_by_book.insert(book_id, loan_id.clone());
        loan_id
    }

    fn get(&self, loan_id: &LoanId) -> Option<Loan> {
        self.loans.get(loan_id).cloned()
    }

    fn active_loan_for(&self, book_id: &BookId) -> Option<Loan> {
        self.active_by_book
            .get(book_id)
            .and_then(|loan_id| self.loans.get(loan_id))
            .filter(|loan| loan.is_active())
            .cloned()
    }

    fn close(&mut self, loan_id: &LoanId, returned_date: NaiveDate) -> Result<()> {
        let loan = self
            .loans
            .get_mut(loan_id)
            .ok_or_else(|| StoreError::LoanNotFound(loan_id.clone()))?;

        *loan = close_loan(loan, returned_date)
            .map_err(|_| StoreError::LoanNotFound(loan_id.clone()))?;

        if self.active_by_book.get(&loan.book_id) == Some(loan_id) {
            self.active_by_book.remove(&loan.book_id);
        }
        Ok(())
    }

    fn loans_for(&self, member_id: &MemberId) -> Vec<Loan> {
        self.loans
            .values()
            .filter(|loan| &loan.member_id == member_id)
            .cloned()
            .collect()
    }

    fn active_count(&self) -> usize {
        self.loans.values().filter(|loan| loan.is_active()).count()
    }

    fn len(&self) -> usize {
        self.loans.len()
    }
}
