use crate::domain::value_objects::{BookId, LoanId, MemberId};
use crate::ports::id_generator::IdGenerator as IdGeneratorTrait;
use std::sync::atomic::{AtomicU64, Ordering};

/// IdGeneratorのモック実装
///
/// 連番で決定的なIDを発行する（`BK0001`, `MEM0001`, `LN0001`, ...）。
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    books: AtomicU64,
    members: AtomicU64,
    loans: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next(counter: &AtomicU64, prefix: &str) -> String {
    let n = counter.fetch_add(1, Ordering::Relaxed) + 1;
    format!("{prefix}{n:04}")
}

impl IdGeneratorTrait for SequentialIdGenerator {
    fn next_book_id(&self) -> BookId {
        BookId::new(next(&self.books, "BK"))
    }

    fn next_member_id(&self) -> MemberId {
        MemberId::new(next(&self.members, "MEM"))
    }

    fn next_loan_id(&self) -> LoanId {
        LoanId::new(next(&self.loans, "LN"))
    }
}
