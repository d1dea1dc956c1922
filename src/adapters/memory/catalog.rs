use crate::domain::{Book, value_objects::BookId};
use crate::ports::{catalog::Catalog as CatalogTrait, id_generator::IdGenerator};
use indexmap::IndexMap;
use std::sync::Arc;

/// Catalogのインメモリ実装
///
/// 登録順を保持するため`IndexMap`で書籍を保持する。
/// 同期はエンジン側のロックに委ねる。
pub struct Catalog {
    ids: Arc<dyn IdGenerator>,
    books: IndexMap<BookId, Book>,
}

impl Catalog {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            books: IndexMap::new(),
        }
    }
}

impl CatalogTrait for Catalog {
    fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> Book {
        let book = Book::new(self.ids.next_book_id(), title, author, isbn);
        self.books.insert(book.id.clone(), book.clone());
        book
    }

    fn save(&mut self, book: Book) {
        self.books.insert(book.id.clone(), book);
    }

    fn get(&self, id: &BookId) -> Option<Book> {
        self.books.get(id).cloned()
    }

    fn all(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}
