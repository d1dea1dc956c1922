/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowBookError {
    /// 既に貸出中
    NotAvailable,
    /// 返却期限が日付の表現範囲を超える
    DueDateOutOfRange,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// 貸出されていない
    NotBorrowed,
}

/// 貸出レコードを閉じる際のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseLoanError {
    /// 既に返却済み
    AlreadyReturned,
}

/// 貸出ポリシーの値が不正
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPolicyError {
    /// 貸出期間が1日以上・上限以下でない
    LoanPeriodOutOfRange,
    /// 日額が負または有限でない
    InvalidFineRate,
}
