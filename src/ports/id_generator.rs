use crate::domain::value_objects::{BookId, LoanId, MemberId};

/// 識別子生成ポート
///
/// 同じ種類の識別子について、プロセスの存続期間中に
/// 過去に発行した値と重複しないことを保証する。
/// 生成方式（乱数、連番）は実装に委ねる。
pub trait IdGenerator: Send + Sync {
    /// 書籍IDを発行する
    fn next_book_id(&self) -> BookId;

    /// 会員IDを発行する
    fn next_member_id(&self) -> MemberId;

    /// 貸出IDを発行する
    fn next_loan_id(&self) -> LoanId;
}
