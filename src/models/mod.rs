//! Data models for Bibliotheca

pub mod item;
pub mod loan;
pub mod patron;
pub mod state;

// Re-export commonly used types
pub use item::{Item, ItemId, ItemStatus, SearchField};
pub use loan::{LoanReceipt, LoanRecord};
pub use patron::{Patron, PatronId};
pub use state::LibraryState;

use crate::error::{AppError, AppResult};

/// Parse a user-supplied numeric id.
///
/// Text that is not an integer is a validation error. An integer that no id
/// can take (negative or too large) names a record that does not exist.
pub fn parse_id(raw: &str, what: &str) -> AppResult<u32> {
    let raw = raw.trim();
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Validation(format!(
            "{} ID must be a number, got '{}'",
            what, raw
        )));
    }
    raw.parse::<u32>()
        .map_err(|_| AppError::NotFound(format!("{} with id {} not found", what, raw)))
}
