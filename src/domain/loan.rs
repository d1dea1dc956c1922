use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{BookId, BorrowBookError, CloseLoanError, LendingPolicy, LoanId, MemberId};

/// 貸出 - 1冊の書籍の1回の貸出
///
/// `returned_date`が未設定の貸出を「有効な貸出」と呼ぶ。
/// 1冊の書籍につき有効な貸出は常に高々1件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    // 識別子
    pub loan_id: LoanId,

    // 他の集約への参照（IDのみ）
    pub book_id: BookId,
    pub member_id: MemberId,

    // 貸出管理の責務
    pub borrowed_date: NaiveDate,
    pub due_date: NaiveDate,
    pub returned_date: Option<NaiveDate>,
}

impl Loan {
    pub fn is_active(&self) -> bool {
        self.returned_date.is_none()
    }
}

/// 純粋関数：返却期限を計算する
///
/// 日付の表現範囲を超える場合はエラー。
pub fn due_date_for(
    borrowed_date: NaiveDate,
    policy: &LendingPolicy,
) -> Result<NaiveDate, BorrowBookError> {
    borrowed_date
        .checked_add_signed(Duration::days(policy.loan_period_days()))
        .ok_or(BorrowBookError::DueDateOutOfRange)
}

/// 純粋関数：貸出レコードを作成する
///
/// 副作用なし。有効な（未返却の）Loanを返す。
pub fn open_loan(
    loan_id: LoanId,
    book_id: BookId,
    member_id: MemberId,
    borrowed_date: NaiveDate,
    due_date: NaiveDate,
) -> Loan {
    Loan {
        loan_id,
        book_id,
        member_id,
        borrowed_date,
        due_date,
        returned_date: None,
    }
}

/// 純粋関数：貸出レコードを閉じる
///
/// ビジネスルール：
/// - 既に返却済みは不可
///
/// 副作用なし。新しいLoanを返す。
pub fn close_loan(loan: &Loan, returned_date: NaiveDate) -> Result<Loan, CloseLoanError> {
    if !loan.is_active() {
        return Err(CloseLoanError::AlreadyReturned);
    }

    Ok(Loan {
        returned_date: Some(returned_date),
        ..loan.clone()
    })
}

/// 純粋関数：延滞罰金を計算する
///
/// ビジネスルール：
/// - 返却日が返却期限以前なら0
/// - それ以外は（暦日での延滞日数）×（日額）
///
/// 日数は経過時間の丸めではなく暦日の差で数える。
pub fn calculate_fine(due_date: NaiveDate, returned_date: NaiveDate, daily_fine_rate: f64) -> f64 {
    if returned_date <= due_date {
        return 0.0;
    }

    let days_overdue = (returned_date - due_date).num_days();
    days_overdue as f64 * daily_fine_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DAILY_FINE_RATE;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_loan() -> Loan {
        open_loan(
            LoanId::new("LN0001"),
            BookId::new("BK0001"),
            MemberId::new("MEM0001"),
            date(2024, 1, 1),
            date(2024, 1, 15),
        )
    }

    #[test]
    fn test_due_date_uses_loan_period() {
        let policy = LendingPolicy::default();
        assert_eq!(
            due_date_for(date(2024, 1, 1), &policy),
            Ok(date(2024, 1, 15))
        );

        let short = LendingPolicy::new(3, DAILY_FINE_RATE).unwrap();
        assert_eq!(
            due_date_for(date(2024, 2, 27), &short),
            Ok(date(2024, 3, 1))
        );
    }

    #[test]
    fn test_due_date_out_of_range_is_an_error() {
        let policy = LendingPolicy::default();
        let last_day = NaiveDate::MAX - Duration::days(3);

        assert_eq!(
            due_date_for(last_day, &policy),
            Err(BorrowBookError::DueDateOutOfRange)
        );
    }

    #[test]
    fn test_open_loan_is_active() {
        let loan = sample_loan();
        assert!(loan.is_active());
        assert_eq!(loan.returned_date, None);
    }

    #[test]
    fn test_close_loan_sets_returned_date() {
        let loan = sample_loan();
        let closed = close_loan(&loan, date(2024, 1, 10)).unwrap();

        assert!(!closed.is_active());
        assert_eq!(closed.returned_date, Some(date(2024, 1, 10)));
        assert_eq!(closed.loan_id, loan.loan_id);
    }

    #[test]
    fn test_close_loan_fails_when_already_returned() {
        let closed = close_loan(&sample_loan(), date(2024, 1, 10)).unwrap();
        let result = close_loan(&closed, date(2024, 1, 11));
        assert_eq!(result.unwrap_err(), CloseLoanError::AlreadyReturned);
    }

    #[test]
    fn test_no_fine_when_returned_early_or_on_due_date() {
        let due = date(2024, 1, 15);
        assert_eq!(calculate_fine(due, date(2024, 1, 1), DAILY_FINE_RATE), 0.0);
        assert_eq!(calculate_fine(due, due, DAILY_FINE_RATE), 0.0);
    }

    #[test]
    fn test_fine_per_whole_overdue_day() {
        let due = date(2024, 1, 15);
        for days in [1_i64, 2, 30] {
            let returned = due + Duration::days(days);
            assert_eq!(
                calculate_fine(due, returned, DAILY_FINE_RATE),
                days as f64 * DAILY_FINE_RATE
            );
        }
    }

    #[test]
    fn test_fine_across_month_boundary() {
        // 1/31期限、2/2返却 → 2日分
        assert_eq!(
            calculate_fine(date(2024, 1, 31), date(2024, 2, 2), 2.0),
            4.0
        );
    }

    #[test]
    fn test_fine_respects_custom_rate() {
        assert_eq!(calculate_fine(date(2024, 1, 1), date(2024, 1, 4), 0.5), 1.5);
    }
}
