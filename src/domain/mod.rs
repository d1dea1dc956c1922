pub mod book;
pub mod errors;
pub mod loan;
pub mod member;
pub mod value_objects;

pub use book::{Book, BookStatus};
pub use errors::*;
pub use loan::Loan;
pub use member::Member;
pub use value_objects::*;
