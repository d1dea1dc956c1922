use crate::domain::{Book, value_objects::BookId};

/// カタログポート
///
/// 書籍レコードを排他的に所有する。
/// 変更は貸出エンジン経由でのみ行われ、エンジンのロックの内側で呼ばれる。
pub trait Catalog: Send + Sync {
    /// 書籍を登録する
    ///
    /// IDを発行し、貸出可能状態で保存して返す。
    /// 空文字列も受け付ける。
    fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> Book;

    /// 書籍の現在状態を保存する（上書き）
    ///
    /// 貸出・返却による状態遷移の反映に使用される。
    fn save(&mut self, book: Book);

    /// IDで書籍を取得する
    fn get(&self, id: &BookId) -> Option<Book>;

    /// 全書籍のスナップショット（登録順）
    fn all(&self) -> Vec<Book>;

    /// 登録冊数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 書籍を検索する
    ///
    /// タイトル・著者（大文字小文字を区別しない）またはISBN（区別する）に
    /// クエリを部分文字列として含む書籍を返す。空クエリはすべてに一致する。
    fn search(&self, query: &str) -> Vec<Book> {
        self.all()
            .into_iter()
            .filter(|book| book.matches(query))
            .collect()
    }
}
