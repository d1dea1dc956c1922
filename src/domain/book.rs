use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookId, BorrowBookError, MemberId, ReturnBookError};

/// 書籍の貸出状態
///
/// 型安全な状態パターン：
/// - 貸出中の場合のみ借主と返却期限を持つ
/// - 「借主はいるが期限がない」といった不正な状態を型で排除する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookStatus {
    /// 貸出可能
    Available,
    /// 貸出中
    Borrowed {
        borrowed_by: MemberId,
        due_date: NaiveDate,
    },
}

/// 書籍 - カタログが所有するレコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(flatten)]
    pub status: BookStatus,
}

impl Book {
    /// 新規作成（貸出可能状態）
    ///
    /// 空文字列のタイトル・著者・ISBNも受け付ける。
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: BookStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, BookStatus::Available)
    }

    pub fn borrowed_by(&self) -> Option<&MemberId> {
        match &self.status {
            BookStatus::Borrowed { borrowed_by, .. } => Some(borrowed_by),
            BookStatus::Available => None,
        }
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        match self.status {
            BookStatus::Borrowed { due_date, .. } => Some(due_date),
            BookStatus::Available => None,
        }
    }

    /// 検索クエリに一致するか
    ///
    /// タイトルと著者は大文字小文字を区別しない部分一致、
    /// ISBNは大文字小文字を区別する部分一致。空クエリはすべてに一致する。
    pub fn matches(&self, query: &str) -> bool {
        let lowered = query.to_lowercase();
        self.title.to_lowercase().contains(&lowered)
            || self.author.to_lowercase().contains(&lowered)
            || self.isbn.contains(query)
    }

    /// 延滞判定：貸出中かつ返却期限が今日より前
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date().is_some_and(|due| due < today)
    }
}

/// 純粋関数：書籍を貸出中にする
///
/// ビジネスルール：
/// - Available -> Borrowed の遷移のみ許可
///
/// 副作用なし。新しいBookを返す。
pub fn check_out(
    book: &Book,
    member_id: MemberId,
    due_date: NaiveDate,
) -> Result<Book, BorrowBookError> {
    if !book.is_available() {
        return Err(BorrowBookError::NotAvailable);
    }

    Ok(Book {
        status: BookStatus::Borrowed {
            borrowed_by: member_id,
            due_date,
        },
        ..book.clone()
    })
}

/// 純粋関数：書籍を貸出可能に戻す
///
/// ビジネスルール：
/// - Borrowed -> Available の遷移のみ許可
/// - 貸出されていない書籍の返却はエラー（no-opにはしない）
pub fn check_in(book: &Book) -> Result<Book, ReturnBookError> {
    if book.is_available() {
        return Err(ReturnBookError::NotBorrowed);
    }

    Ok(Book {
        status: BookStatus::Available,
        ..book.clone()
    })
}
