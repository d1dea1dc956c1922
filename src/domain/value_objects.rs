use serde::{Deserialize, Serialize};
use std::fmt;

use super::InvalidPolicyError;

/// 貸出期間（日数）
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// 設定できる貸出期間の上限（日数）
pub const MAX_LOAN_PERIOD_DAYS: i64 = 3650;

/// 延滞1日あたりの罰金
pub const DAILY_FINE_RATE: f64 = 2.0;

/// 書籍ID - カタログが発行する人間が読める識別子（例: `BK4F3A9C01`）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 会員ID - 会員名簿が発行する識別子（例: `MEM0001`）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 貸出ID - 貸出台帳のレコード識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanId(String);

impl LoanId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 貸出ポリシー
///
/// 貸出期間と延滞罰金の単価をまとめた値オブジェクト。
/// 既定値は`LOAN_PERIOD_DAYS`と`DAILY_FINE_RATE`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LendingPolicy {
    loan_period_days: i64,
    daily_fine_rate: f64,
}

impl LendingPolicy {
    /// 検証してポリシーを作成する
    ///
    /// - 貸出期間は1日以上`MAX_LOAN_PERIOD_DAYS`以下
    /// - 日額は0以上の有限値
    pub fn new(loan_period_days: i64, daily_fine_rate: f64) -> Result<Self, InvalidPolicyError> {
        if !(1..=MAX_LOAN_PERIOD_DAYS).contains(&loan_period_days) {
            return Err(InvalidPolicyError::LoanPeriodOutOfRange);
        }
        if !daily_fine_rate.is_finite() || daily_fine_rate < 0.0 {
            return Err(InvalidPolicyError::InvalidFineRate);
        }

        Ok(Self {
            loan_period_days,
            daily_fine_rate,
        })
    }

    pub fn loan_period_days(&self) -> i64 {
        self.loan_period_days
    }

    pub fn daily_fine_rate(&self) -> f64 {
        self.daily_fine_rate
    }
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            loan_period_days: LOAN_PERIOD_DAYS,
            daily_fine_rate: DAILY_FINE_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_compare_by_value() {
        assert_eq!(BookId::new("BK0001"), BookId::new("BK0001"));
        assert_ne!(MemberId::new("MEM0001"), MemberId::new("MEM0002"));
    }

    #[test]
    fn test_id_display_is_raw_value() {
        assert_eq!(LoanId::new("LN0007").to_string(), "LN0007");
        assert_eq!(BookId::new("BK00AB12").value(), "BK00AB12");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&MemberId::new("MEM0001")).unwrap();
        assert_eq!(json, "\"MEM0001\"");
    }

    #[test]
    fn test_default_policy() {
        let policy = LendingPolicy::default();
        assert_eq!(policy.loan_period_days(), 14);
        assert_eq!(policy.daily_fine_rate(), 2.0);
    }

    #[test]
    fn test_policy_accepts_bounds() {
        assert!(LendingPolicy::new(1, 0.0).is_ok());
        assert!(LendingPolicy::new(MAX_LOAN_PERIOD_DAYS, 2.0).is_ok());
    }

    #[test]
    fn test_policy_rejects_out_of_range_period() {
        for days in [0, -14, MAX_LOAN_PERIOD_DAYS + 1, 100_000_000] {
            assert_eq!(
                LendingPolicy::new(days, DAILY_FINE_RATE),
                Err(InvalidPolicyError::LoanPeriodOutOfRange),
                "{days} days"
            );
        }
    }

    #[test]
    fn test_policy_rejects_invalid_fine_rate() {
        for rate in [-0.5, f64::NAN, f64::INFINITY] {
            assert_eq!(
                LendingPolicy::new(LOAN_PERIOD_DAYS, rate),
                Err(InvalidPolicyError::InvalidFineRate)
            );
        }
    }
}
