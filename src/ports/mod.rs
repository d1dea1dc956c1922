pub mod catalog;
pub mod clock;
pub mod errors;
pub mod id_generator;
pub mod loan_ledger;
pub mod roster;

pub use catalog::*;
pub use clock::*;
pub use errors::{Result, StoreError};
pub use id_generator::*;
pub use loan_ledger::*;
pub use roster::*;
