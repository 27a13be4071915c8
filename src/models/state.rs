//! Whole library data set, as exchanged with storage

use super::{item::Item, loan::LoanRecord, patron::Patron};

/// Everything the library persists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryState {
    pub items: Vec<Item>,
    pub patrons: Vec<Patron>,
    pub history: Vec<LoanRecord>,
}
