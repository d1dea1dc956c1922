use crate::domain::value_objects::{BookId, LoanId, MemberId};
use crate::ports::StoreError;
use thiserror::Error;

/// 貸出エンジンのエラー
///
/// 利用者の入力に起因するエラーと、内部不整合（`InvariantViolation`）を区別する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LendingError {
    /// 書籍が存在しない
    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    /// 会員が存在しない
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// 貸出が存在しない、または既に返却済み
    #[error("Loan not found: {0}")]
    LoanNotFound(LoanId),

    /// 会員が無効のため貸出不可
    #[error("Member is not active: {0}")]
    InactiveMember(MemberId),

    /// 書籍が既に貸出中
    #[error("Book is not available for borrowing: {0}")]
    NotAvailable(BookId),

    /// 書籍が貸出されていない
    #[error("Book is not borrowed: {0}")]
    NotBorrowed(BookId),

    /// 内部の整合性違反（バグを示す）
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl LendingError {
    /// 未知のIDが指定されたか
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LendingError::BookNotFound(_)
                | LendingError::MemberNotFound(_)
                | LendingError::LoanNotFound(_)
        )
    }

    /// 利用者の誤りではなく内部の欠陥を示すか
    pub fn is_defect(&self) -> bool {
        matches!(self, LendingError::InvariantViolation(_))
    }
}

impl From<StoreError> for LendingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MemberNotFound(id) => LendingError::MemberNotFound(id),
            StoreError::LoanNotFound(id) => LendingError::LoanNotFound(id),
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LendingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert!(LendingError::BookNotFound(BookId::new("BK0001")).is_not_found());
        assert!(LendingError::LoanNotFound(LoanId::new("LN0001")).is_not_found());
        assert!(!LendingError::NotAvailable(BookId::new("BK0001")).is_not_found());
        assert!(LendingError::InvariantViolation("x".into()).is_defect());
        assert!(!LendingError::InactiveMember(MemberId::new("MEM0001")).is_defect());
    }

    #[test]
    fn test_store_error_conversion() {
        let id = MemberId::new("MEM0042");
        let err: LendingError = StoreError::MemberNotFound(id.clone()).into();
        assert_eq!(err, LendingError::MemberNotFound(id));
        assert_eq!(err.to_string(), "Member not found: MEM0042");
    }
}
