use chrono::NaiveDate;

/// 時刻ソースポート
///
/// 「今日」の取得を一箇所に集約し、テストでは固定日付を注入できるようにする。
pub trait Clock: Send + Sync {
    /// 今日の日付
    fn today(&self) -> NaiveDate;
}
