//! Item (catalog entry) model and related types.
//!
//! Serialized field names follow the layout of existing data files
//! (`id_ksiazki`, `tytul`, ...), so files written by earlier versions load as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

pub type ItemId = u32;

/// Loan status of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Available,
    OnLoan,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Available => write!(f, "Available"),
            ItemStatus::OnLoan => write!(f, "On loan"),
        }
    }
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "id_ksiazki")]
    pub id: ItemId,
    #[serde(rename = "tytul")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "rok_wydania")]
    pub publication_year: i32,
    #[serde(rename = "wypozyczona", default)]
    pub on_loan: bool,
    /// Set iff `on_loan`
    #[serde(rename = "data_zwrotu", default)]
    pub due_date: Option<NaiveDate>,
}

impl Item {
    pub fn new(id: ItemId, title: String, author: String, publication_year: i32) -> Self {
        Self {
            id,
            title,
            author,
            publication_year,
            on_loan: false,
            due_date: None,
        }
    }

    pub fn status(&self) -> ItemStatus {
        if self.on_loan {
            ItemStatus::OnLoan
        } else {
            ItemStatus::Available
        }
    }

    /// Mark the item as lent until `due_date`
    pub(crate) fn lend(&mut self, due_date: NaiveDate) {
        self.on_loan = true;
        self.due_date = Some(due_date);
    }

    /// Mark the item as back on the shelf
    pub(crate) fn release(&mut self) {
        self.on_loan = false;
        self.due_date = None;
    }

    /// Whether `on_loan` and `due_date` agree
    pub fn is_consistent(&self) -> bool {
        self.on_loan == self.due_date.is_some()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} ({}) - Status: {}",
            self.id,
            self.title,
            self.author,
            self.publication_year,
            self.status()
        )?;
        if let Some(due) = self.due_date {
            write!(f, ", Due: {}", due)?;
        }
        Ok(())
    }
}

/// Field a catalog search matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    PublicationYear,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::PublicationYear => "year",
        }
    }

    /// Stringified value of this field on `item`
    pub fn value_of(&self, item: &Item) -> String {
        match self {
            SearchField::Title => item.title.clone(),
            SearchField::Author => item.author.clone(),
            SearchField::PublicationYear => item.publication_year.to_string(),
        }
    }
}

impl FromStr for SearchField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "tytul" => Ok(SearchField::Title),
            "author" | "autor" => Ok(SearchField::Author),
            "year" | "publication_year" | "publicationyear" | "rok_wydania" => {
                Ok(SearchField::PublicationYear)
            }
            other => Err(AppError::Validation(format!(
                "Unsupported search field '{}' (expected title, author or year)",
                other
            ))),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
