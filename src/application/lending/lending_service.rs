use crate::adapters::memory;
use crate::domain::{self, Book, Loan, Member, value_objects::*};
use crate::ports::*;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::errors::{LendingError, Result};

/// エンジンが保持する3つのストア
///
/// 1つのロックでまとめて保護し、貸出・返却の一連の更新を
/// 外部から原子的に見えるようにする。
pub(super) struct LibraryStores {
    pub(super) catalog: Box<dyn Catalog>,
    pub(super) roster: Box<dyn Roster>,
    pub(super) ledger: Box<dyn LoanLedger>,
}

/// サービスの依存関係
///
/// ストア・時刻ソース・貸出ポリシーをコンストラクタで注入する。
/// 振る舞いは持たず、各操作は`&ServiceDependencies`を受け取る関数として定義する。
///
/// 複製は同じストアを共有するため、並行する呼び出し元にそのまま渡せる。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub(super) stores: Arc<RwLock<LibraryStores>>,
    pub clock: Arc<dyn Clock>,
    pub policy: LendingPolicy,
}

impl ServiceDependencies {
    pub fn new(
        catalog: Box<dyn Catalog>,
        roster: Box<dyn Roster>,
        ledger: Box<dyn LoanLedger>,
        clock: Arc<dyn Clock>,
        policy: LendingPolicy,
    ) -> Self {
        Self {
            stores: Arc::new(RwLock::new(LibraryStores {
                catalog,
                roster,
                ledger,
            })),
            clock,
            policy,
        }
    }

    /// インメモリストアで構成する
    pub fn in_memory(
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        policy: LendingPolicy,
    ) -> Self {
        Self::new(
            Box::new(memory::Catalog::new(ids.clone())),
            Box::new(memory::Roster::new(ids.clone())),
            Box::new(memory::LoanLedger::new(ids)),
            clock,
            policy,
        )
    }
}

/// 整合性違反を記録してエラーを返す
fn invariant_violation(message: String) -> LendingError {
    tracing::error!(%message, "lending invariant violated");
    LendingError::InvariantViolation(message)
}

/// 書籍を登録する
///
/// 空文字列のタイトル・著者・ISBNも受け付ける。
pub async fn add_book(deps: &ServiceDependencies, title: &str, author: &str, isbn: &str) -> Book {
    let mut stores = deps.stores.write().await;
    let book = stores.catalog.add_book(title, author, isbn);

    tracing::info!(book_id = %book.id, title, author, "book added");
    book
}

/// 会員を登録する
///
/// 登録日は時刻ソースの「今日」。会員は有効状態で作成される。
pub async fn register_member(deps: &ServiceDependencies, name: &str, email: &str) -> MemberId {
    let mut stores = deps.stores.write().await;
    let member_id = stores.roster.register(name, email, deps.clock.today());

    tracing::info!(%member_id, name, "member registered");
    member_id
}

/// 会員の有効/無効を切り替える
///
/// 会員管理側から呼ばれる。無効な会員は貸出不可になる。
pub async fn set_member_active(
    deps: &ServiceDependencies,
    member_id: &MemberId,
    active: bool,
) -> Result<()> {
    let mut stores = deps.stores.write().await;
    stores.roster.set_active(member_id, active)?;

    tracing::info!(%member_id, active, "member activity changed");
    Ok(())
}

pub async fn get_book(deps: &ServiceDependencies, book_id: &BookId) -> Option<Book> {
    deps.stores.read().await.catalog.get(book_id)
}

pub async fn get_member(deps: &ServiceDependencies, member_id: &MemberId) -> Option<Member> {
    deps.stores.read().await.roster.get(member_id)
}

/// 全書籍（登録順）
pub async fn list_books(deps: &ServiceDependencies) -> Vec<Book> {
    deps.stores.read().await.catalog.all()
}

/// 書籍を検索する
///
/// タイトル・著者は大文字小文字を区別せず、ISBNは区別して部分一致で探す。
pub async fn search_books(deps: &ServiceDependencies, query: &str) -> Vec<Book> {
    let books = deps.stores.read().await.catalog.search(query);

    tracing::debug!(query, hits = books.len(), "book search");
    books
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 会員が存在し、有効であること
/// - 書籍が貸出可能であること
/// - 返却期限は今日 + 貸出期間
///
/// 書籍の状態更新と貸出レコードの作成は書き込みロックの内側で行い、
/// 片方だけが見える瞬間はない。
///
/// # 戻り値
/// 成功時は作成された貸出のID
pub async fn borrow_book(
    deps: &ServiceDependencies,
    book_id: &BookId,
    member_id: &MemberId,
) -> Result<LoanId> {
    let mut stores = deps.stores.write().await;
    let today = deps.clock.today();

    // 1. 書籍の存在確認
    let book = stores
        .catalog
        .get(book_id)
        .ok_or_else(|| LendingError::BookNotFound(book_id.clone()))?;

    // 2. 会員の存在・有効確認
    if !stores.roster.is_active(member_id)? {
        tracing::warn!(%book_id, %member_id, "borrow rejected: member is not active");
        return Err(LendingError::InactiveMember(member_id.clone()));
    }

    // 3. ドメイン層の純粋関数で状態遷移
    let due_date = domain::loan::due_date_for(today, &deps.policy).map_err(|_| {
        invariant_violation(format!("due date for a loan starting {today} is out of range"))
    })?;
    let borrowed = domain::book::check_out(&book, member_id.clone(), due_date).map_err(|_| {
        tracing::warn!(%book_id, %member_id, "borrow rejected: book is not available");
        LendingError::NotAvailable(book_id.clone())
    })?;

    // 貸出可能な書籍に有効な貸出が残っていてはならない
    if let Some(stale) = stores.ledger.active_loan_for(book_id) {
        return Err(invariant_violation(format!(
            "book {} is available but loan {} is still open",
            book_id, stale.loan_id
        )));
    }

    // 4. 台帳に記録し、カタログを更新
    let loan_id = stores
        .ledger
        .open(book_id.clone(), member_id.clone(), today, due_date);
    stores.catalog.save(borrowed);

    tracing::info!(%book_id, %member_id, %loan_id, %due_date, "book borrowed");
    Ok(loan_id)
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - 書籍が存在し、貸出中であること（未貸出の返却はエラー）
/// - 延滞していても返却は受け付け、罰金を計算する
///
/// 貸出中なのに有効な貸出が見つからない場合は内部不整合として扱う。
///
/// # 戻り値
/// 延滞罰金（期限内なら0.0）
pub async fn return_book(deps: &ServiceDependencies, book_id: &BookId) -> Result<f64> {
    let mut stores = deps.stores.write().await;
    let today = deps.clock.today();

    // 1. 書籍の存在確認
    let book = stores
        .catalog
        .get(book_id)
        .ok_or_else(|| LendingError::BookNotFound(book_id.clone()))?;

    // 2. ドメイン層の純粋関数で状態遷移
    let available = domain::book::check_in(&book).map_err(|_| {
        tracing::warn!(%book_id, "return rejected: book is not borrowed");
        LendingError::NotBorrowed(book_id.clone())
    })?;

    // 3. 有効な貸出を特定
    let loan = stores.ledger.active_loan_for(book_id).ok_or_else(|| {
        invariant_violation(format!("book {book_id} is borrowed but has no open loan"))
    })?;

    if book.borrowed_by() != Some(&loan.member_id) {
        return Err(invariant_violation(format!(
            "book {} is held by {:?} but loan {} belongs to {}",
            book_id,
            book.borrowed_by().map(MemberId::value),
            loan.loan_id,
            loan.member_id
        )));
    }

    // 4. 罰金計算
    let fine = domain::loan::calculate_fine(loan.due_date, today, deps.policy.daily_fine_rate());

    // 5. 台帳を閉じ、カタログを更新
    stores.ledger.close(&loan.loan_id, today).map_err(|err| {
        invariant_violation(format!("open loan {} could not be closed: {err}", loan.loan_id))
    })?;
    stores.catalog.save(available);

    tracing::info!(%book_id, loan_id = %loan.loan_id, fine, "book returned");
    Ok(fine)
}

/// 会員の全貸出（有効・返却済み）を取得する
pub async fn get_member_loans(
    deps: &ServiceDependencies,
    member_id: &MemberId,
) -> Result<Vec<Loan>> {
    let stores = deps.stores.read().await;

    if stores.roster.get(member_id).is_none() {
        return Err(LendingError::MemberNotFound(member_id.clone()));
    }

    let loans = stores.ledger.loans_for(member_id);
    tracing::debug!(%member_id, loans = loans.len(), "member loans fetched");
    Ok(loans)
}

/// 貸出IDで貸出を取得する
pub async fn get_loan(deps: &ServiceDependencies, loan_id: &LoanId) -> Result<Loan> {
    deps.stores
        .read()
        .await
        .ledger
        .get(loan_id)
        .ok_or_else(|| LendingError::LoanNotFound(loan_id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{FixedClock, SequentialIdGenerator};
    use crate::domain::value_objects::{BookId, LendingPolicy, LoanId, MemberId};
    use chrono::NaiveDate;

    fn day0() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn deps() -> (ServiceDependencies, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(day0()));
        let deps = ServiceDependencies::in_memory(
            Arc::new(SequentialIdGenerator::new()),
            clock.clone(),
            LendingPolicy::default(),
        );
        (deps, clock)
    }

    /// 台帳にだけ有効な貸出を作り、カタログと食い違わせる
    async fn open_stray_loan(deps: &ServiceDependencies, book_id: &BookId, member_id: &MemberId) {
        let mut stores = deps.stores.write().await;
        stores
            .ledger
            .open(book_id.clone(), member_id.clone(), day0(), day0());
    }

    #[tokio::test]
    async fn test_register_member_stamps_joined_date() {
        let (deps, clock) = deps();
        clock.advance_days(3);

        let member_id = register_member(&deps, "John Doe", "john@example.com").await;
        let member = get_member(&deps, &member_id).await.unwrap();

        assert_eq!(
            member.joined_date,
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()
        );
        assert!(member.active);
    }

    #[tokio::test]
    async fn test_return_detects_missing_loan() {
        let (deps, _) = deps();
        let book = add_book(&deps, "1984", "George Orwell", "978-0451524935").await;
        let member_id = register_member(&deps, "John Doe", "john@example.com").await;

        // カタログだけを貸出中にする
        {
            let mut stores = deps.stores.write().await;
            let borrowed = domain::book::check_out(&book, member_id.clone(), day0()).unwrap();
            stores.catalog.save(borrowed);
        }

        let err = return_book(&deps, &book.id).await.unwrap_err();
        assert!(err.is_defect());
    }

    #[tokio::test]
    async fn test_borrow_detects_stray_open_loan() {
        let (deps, _) = deps();
        let book = add_book(&deps, "1984", "George Orwell", "978-0451524935").await;
        let member_id = register_member(&deps, "John Doe", "john@example.com").await;
        open_stray_loan(&deps, &book.id, &member_id).await;

        let err = borrow_book(&deps, &book.id, &member_id).await.unwrap_err();
        assert!(err.is_defect());
        assert!(get_book(&deps, &book.id).await.unwrap().is_available());
    }

    #[tokio::test]
    async fn test_get_loan_by_id() {
        let (deps, _) = deps();
        let book = add_book(&deps, "Dune", "Frank Herbert", "978-0441013593").await;
        let member_id = register_member(&deps, "Jane", "jane@example.com").await;
        let loan_id = borrow_book(&deps, &book.id, &member_id).await.unwrap();

        let loan = get_loan(&deps, &loan_id).await.unwrap();
        assert_eq!(loan.book_id, book.id);
        assert_eq!(loan.due_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let unknown = LoanId::new("LN9999");
        assert_eq!(
            get_loan(&deps, &unknown).await,
            Err(LendingError::LoanNotFound(unknown.clone()))
        );
    }
}
