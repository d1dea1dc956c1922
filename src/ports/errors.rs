use crate::domain::value_objects::{LoanId, MemberId};
use thiserror::Error;

/// ストア操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// 会員が存在しない
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// 貸出が存在しない、または既に返却済み
    #[error("Loan not found or already closed: {0}")]
    LoanNotFound(LoanId),
}

/// ストア操作の Result型
pub type Result<T> = std::result::Result<T, StoreError>;
