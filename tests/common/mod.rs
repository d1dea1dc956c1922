#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use lending_engine::adapters::mock::{FixedClock, SequentialIdGenerator};
use lending_engine::application::lending::ServiceDependencies;
use lending_engine::domain::LendingPolicy;
use std::sync::Arc;

/// テストの基準日（day 0）
pub fn day(n: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(n)
}

/// テスト用の依存関係を作成する
///
/// インメモリストア、連番ID、day 0 に固定した時計、既定の貸出ポリシーで構成する。
/// 時計を進めるため`FixedClock`のハンドルも返す。
pub fn create_test_deps() -> (ServiceDependencies, Arc<FixedClock>) {
    create_test_deps_with_policy(LendingPolicy::default())
}

pub fn create_test_deps_with_policy(
    policy: LendingPolicy,
) -> (ServiceDependencies, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(day(0)));
    let deps = ServiceDependencies::in_memory(
        Arc::new(SequentialIdGenerator::new()),
        clock.clone(),
        policy,
    );
    (deps, clock)
}
