//! Business logic services

pub mod catalog;
pub mod loans;
pub mod roster;

pub use catalog::Catalog;
pub use loans::{LoanLedger, LOAN_PERIOD_DAYS};
pub use roster::Roster;
