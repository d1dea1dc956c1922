use crate::domain::Book;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lending_service::{LibraryStores, ServiceDependencies};

/// 蔵書・貸出状況のレポート
///
/// 1回の読み取りロックの内側で集計した、内部的に整合したスナップショット。
/// 呼び出し側がそのままJSONなどに直列化できる固定形のレコード。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryReport {
    pub total_books: usize,
    pub available_books: usize,
    pub borrowed_books: usize,
    pub total_members: usize,
    /// 未返却の貸出件数
    pub active_loans: usize,
    /// これまでに作成された貸出の総数
    pub total_loans: usize,
    pub overdue_books: usize,
}

fn overdue_books(stores: &LibraryStores, today: NaiveDate) -> Vec<Book> {
    stores
        .catalog
        .all()
        .into_iter()
        .filter(|book| book.is_overdue(today))
        .collect()
}

/// 延滞中の書籍を取得する
///
/// 貸出中かつ返却期限が今日より前の書籍をカタログの登録順で返す。
/// 返却期限当日は延滞に含まない。
pub async fn get_overdue_books(deps: &ServiceDependencies) -> Vec<Book> {
    let stores = deps.stores.read().await;
    let today = deps.clock.today();

    let books = overdue_books(&stores, today);
    tracing::debug!(%today, overdue = books.len(), "overdue books detected");
    books
}

/// レポートを生成する
pub async fn generate_report(deps: &ServiceDependencies) -> LibraryReport {
    let stores = deps.stores.read().await;
    let today = deps.clock.today();

    let books = stores.catalog.all();
    let available_books = books.iter().filter(|book| book.is_available()).count();

    let report = LibraryReport {
        total_books: books.len(),
        available_books,
        borrowed_books: books.len() - available_books,
        total_members: stores.roster.len(),
        active_loans: stores.ledger.active_count(),
        total_loans: stores.ledger.len(),
        overdue_books: overdue_books(&stores, today).len(),
    };

    tracing::debug!(?report, "library report generated");
    report
}
