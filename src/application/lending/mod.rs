mod errors;
mod lending_service;
mod reporting;

pub use errors::{LendingError, Result};
pub use lending_service::{
    ServiceDependencies, add_book, borrow_book, get_book, get_loan, get_member, get_member_loans,
    list_books, register_member, return_book, search_books, set_member_active,
};
pub use reporting::{LibraryReport, generate_report, get_overdue_books};
