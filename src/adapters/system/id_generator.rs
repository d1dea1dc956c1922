use crate::domain::value_objects::{BookId, LoanId, MemberId};
use crate::ports::id_generator::IdGenerator as IdGeneratorTrait;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

const BOOK_PREFIX: &str = "BK";
const MEMBER_PREFIX: &str = "MEM";

/// Random implementation of IdGenerator
///
/// Book and member ids are a fixed prefix followed by 32 random bits in
/// upper-case hex (`BK4F3A9C01`, `MEM00C0FFEE`). Loan ids are v4 UUIDs.
/// Every issued id is remembered; a collision is redrawn.
#[derive(Debug, Default)]
pub struct RandomIdGenerator {
    issued: Mutex<HashSet<String>>,
}

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw_unique(&self, mut draw: impl FnMut() -> String) -> String {
        let mut issued = self.issued.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            let candidate = draw();
            if issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// 32 random bits as 8 upper-case hex digits.
fn random_suffix() -> String {
    // The first 8 hex digits of a v4 UUID carry no version/variant bits
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}

impl IdGeneratorTrait for RandomIdGenerator {
    fn next_book_id(&self) -> BookId {
        BookId::new(self.draw_unique(|| format!("{BOOK_PREFIX}{}", random_suffix())))
    }

    fn next_member_id(&self) -> MemberId {
        MemberId::new(self.draw_unique(|| format!("{MEMBER_PREFIX}{}", random_suffix())))
    }

    fn next_loan_id(&self) -> LoanId {
        LoanId::new(self.draw_unique(|| Uuid::new_v4().to_string()))
    }
}
