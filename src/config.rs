//! 環境変数による設定

use crate::domain::{
    DAILY_FINE_RATE, InvalidPolicyError, LOAN_PERIOD_DAYS, LendingPolicy, MAX_LOAN_PERIOD_DAYS,
};
use thiserror::Error;

pub const LOAN_PERIOD_DAYS_VAR: &str = "LIBRARY_LOAN_PERIOD_DAYS";
pub const DAILY_FINE_RATE_VAR: &str = "LIBRARY_DAILY_FINE_RATE";
pub const LOG_FILTER_VAR: &str = "LIBRARY_LOG_FILTER";

const DEFAULT_LOG_FILTER: &str = "lending_engine=debug";

/// 設定読み込みのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("Invalid lending policy: {0:?}")]
    InvalidPolicy(InvalidPolicyError),
}

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub policy: LendingPolicy,
    /// `RUST_LOG`が未設定の場合に使うtracingのフィルタ
    pub log_filter: String,
}

impl AppConfig {
    /// 環境変数から読み込む
    ///
    /// 未設定の項目は既定値（貸出期間14日、日額2.0）を使う。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let loan_period_days = match lookup(LOAN_PERIOD_DAYS_VAR) {
            Some(raw) => parse_loan_period(&raw)?,
            None => LOAN_PERIOD_DAYS,
        };
        let daily_fine_rate = match lookup(DAILY_FINE_RATE_VAR) {
            Some(raw) => parse_fine_rate(&raw)?,
            None => DAILY_FINE_RATE,
        };
        let log_filter = lookup(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        Ok(Self {
            policy: LendingPolicy::new(loan_period_days, daily_fine_rate)
                .map_err(ConfigError::InvalidPolicy)?,
            log_filter,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            policy: LendingPolicy::default(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

fn parse_loan_period(raw: &str) -> Result<i64, ConfigError> {
    let invalid = |reason| ConfigError::InvalidValue {
        key: LOAN_PERIOD_DAYS_VAR,
        value: raw.to_string(),
        reason,
    };

    let days: i64 = raw.trim().parse().map_err(|_| invalid("not an integer"))?;
    if days <= 0 {
        return Err(invalid("must be positive"));
    }
    if days > MAX_LOAN_PERIOD_DAYS {
        return Err(invalid("must not exceed 3650 days"));
    }
    Ok(days)
}

fn parse_fine_rate(raw: &str) -> Result<f64, ConfigError> {
    let invalid = |reason| ConfigError::InvalidValue {
        key: DAILY_FINE_RATE_VAR,
        value: raw.to_string(),
        reason,
    };

    let rate: f64 = raw.trim().parse().map_err(|_| invalid("not a number"))?;
    if !rate.is_finite() || rate < 0.0 {
        return Err(invalid("must be a non-negative finite number"));
    }
    Ok(rate)
}
