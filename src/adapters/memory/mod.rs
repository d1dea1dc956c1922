pub mod catalog;
pub mod loan_ledger;
pub mod roster;

pub use catalog::Catalog;
pub use loan_ledger::LoanLedger;
pub use roster::Roster;
