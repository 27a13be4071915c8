//! Loan management service

use chrono::{Duration, Local, NaiveDate};

use crate::{
    error::{AppError, AppResult},
    models::{
        item::Item,
        loan::{LoanReceipt, LoanRecord},
        parse_id,
    },
    services::{catalog::Catalog, roster::Roster},
};

/// Length of every loan
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// Lends and takes back items, and keeps the checkout history.
///
/// Each item moves `Available -> OnLoan -> Available`. Every operation checks
/// all of its preconditions before touching the catalog or the roster, so a
/// failed call leaves both unchanged.
#[derive(Debug, Default)]
pub struct LoanLedger {
    history: Vec<LoanRecord>,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_history(history: Vec<LoanRecord>) -> Self {
        Self { history }
    }

    /// Lend an item to a patron, due [`LOAN_PERIOD_DAYS`] from today
    pub fn checkout(
        &mut self,
        catalog: &mut Catalog,
        roster: &mut Roster,
        item_id: &str,
        patron_id: &str,
    ) -> AppResult<LoanReceipt> {
        self.checkout_on(catalog, roster, item_id, patron_id, Local::now().date_naive())
    }

    /// Lend an item to a patron as of `today`
    pub fn checkout_on(
        &mut self,
        catalog: &mut Catalog,
        roster: &mut Roster,
        item_id: &str,
        patron_id: &str,
        today: NaiveDate,
    ) -> AppResult<LoanReceipt> {
        let item_id = parse_id(item_id, "Item")?;
        let patron_id = parse_id(patron_id, "Patron")?;

        let item = catalog
            .get_mut(item_id)
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", item_id)))?;
        let patron = roster
            .get_mut(patron_id)
            .ok_or_else(|| AppError::NotFound(format!("Patron with id {} not found", patron_id)))?;

        if item.on_loan {
            return Err(AppError::Conflict(format!(
                "Item '{}' is already on loan",
                item.title
            )));
        }

        let due_date = today + Duration::days(LOAN_PERIOD_DAYS);
        item.lend(due_date);
        patron.active_loans.push(item.id);

        let record = LoanRecord {
            patron_name: patron.full_name(),
            item_title: item.title.clone(),
            date: today,
        };
        tracing::info!(
            "Loan: '{}' (id={}) to {} (id={}), due {}",
            record.item_title,
            item_id,
            record.patron_name,
            patron_id,
            due_date
        );

        let receipt = LoanReceipt {
            patron_name: record.patron_name.clone(),
            item_title: record.item_title.clone(),
            due_date,
        };
        self.history.push(record);
        Ok(receipt)
    }

    /// Take back an item from the patron who borrowed it.
    /// History only records checkouts and is left alone here.
    pub fn checkin(
        &self,
        catalog: &mut Catalog,
        roster: &mut Roster,
        item_id: &str,
        patron_id: &str,
    ) -> AppResult<Item> {
        let item_id = parse_id(item_id, "Item")?;
        let patron_id = parse_id(patron_id, "Patron")?;

        let patron = roster
            .get_mut(patron_id)
            .ok_or_else(|| AppError::NotFound(format!("Patron with id {} not found", patron_id)))?;
        let pos = patron
            .active_loans
            .iter()
            .position(|&id| id == item_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Item with id {} was not borrowed by {}",
                    item_id,
                    patron.full_name()
                ))
            })?;
        let item = catalog
            .get_mut(item_id)
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", item_id)))?;

        patron.active_loans.remove(pos);
        item.release();

        tracing::info!(
            "Return: '{}' (id={}) from {} (id={})",
            item.title,
            item_id,
            patron.full_name(),
            patron_id
        );
        Ok(item.clone())
    }

    /// Checkouts in the order they happened
    pub fn history(&self) -> &[LoanRecord] {
        &self.history
    }
}
