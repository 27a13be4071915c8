//! Loan history record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Checkout event, frozen at the time of the loan.
/// Holds copies of the names so later catalog or roster edits do not alter history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    #[serde(rename = "uzytkownik")]
    pub patron_name: String,
    #[serde(rename = "ksiazka")]
    pub item_title: String,
    #[serde(rename = "data")]
    pub date: NaiveDate,
}

impl fmt::Display for LoanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} borrowed '{}' - Date: {}",
            self.patron_name, self.item_title, self.date
        )
    }
}

/// Outcome of a successful checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanReceipt {
    pub patron_name: String,
    pub item_title: String,
    pub due_date: NaiveDate,
}
