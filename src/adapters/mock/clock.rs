use crate::ports::clock::Clock as ClockTrait;
use chrono::{Duration, NaiveDate};
use std::sync::{Mutex, PoisonError};

/// Clockのモック実装
///
/// 固定日付を返す。テストから日付を進めて延滞や罰金を再現できる。
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    /// 日付を設定する
    pub fn set(&self, today: NaiveDate) {
        *self.today.lock().unwrap_or_else(PoisonError::into_inner) = today;
    }

    /// 日付を指定日数進める
    pub fn advance_days(&self, days: i64) {
        let mut today = self.today.lock().unwrap_or_else(PoisonError::into_inner);
        *today += Duration::days(days);
    }
}

impl ClockTrait for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
