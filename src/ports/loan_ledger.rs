use chrono::NaiveDate;

use super::errors::Result;
use crate::domain::{
    Loan,
    value_objects::{BookId, LoanId, MemberId},
};

/// 貸出台帳ポート
///
/// 貸出・返却履歴の正となるストア。レコードは削除されない。
pub trait LoanLedger: Send + Sync {
    /// 有効な貸出を作成し、発行したIDを返す
    fn open(
        &mut self,
        book_id: BookId,
        member_id: MemberId,
        borrowed_date: NaiveDate,
        due_date: NaiveDate,
    ) -> LoanId;

    /// IDで貸出を取得する
    fn get(&self, loan_id: &LoanId) -> Option<Loan>;

    /// 書籍の有効な貸出（未返却）を取得する
    fn active_loan_for(&self, book_id: &BookId) -> Option<Loan>;

    /// 貸出を閉じる（返却日を設定）
    ///
    /// # エラー
    /// IDが存在しない、または既に返却済みの場合は`StoreError::LoanNotFound`
    fn close(&mut self, loan_id: &LoanId, returned_date: NaiveDate) -> Result<()>;

    /// 会員の全貸出（有効・返却済みの両方、作成順）
    fn loans_for(&self, member_id: &MemberId) -> Vec<Loan>;

    /// 有効な貸出の件数
    fn active_count(&self) -> usize;

    /// これまでに作成された貸出の総数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
