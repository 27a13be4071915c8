//! Patron (borrower) model

use std::fmt;

use super::item::ItemId;

pub type PatronId = u32;

/// Registered borrower
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patron {
    pub id: PatronId,
    pub first_name: String,
    pub last_name: String,
    /// Items currently held, in borrowing order. Resolved through the catalog.
    pub active_loans: Vec<ItemId>,
}

impl Patron {
    pub fn new(id: PatronId, first_name: String, last_name: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            active_loans: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Patron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} - Loans: {}",
            self.id,
            self.first_name,
            self.last_name,
            self.active_loans.len()
        )
    }
}
