//! Library facade
//!
//! Owns the catalog, the roster, the loan ledger and the storage backend, and
//! is the only entry point the menu shell talks to.

use crate::{
    error::{AppError, AppResult},
    models::{
        Item, ItemId, LibraryState, LoanReceipt, LoanRecord, Patron, PatronId, SearchField,
    },
    repository::LibraryStorage,
    services::{Catalog, LoanLedger, Roster},
};

/// Where the in-memory state came from on the last load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Read from storage
    Storage,
    /// Nothing stored yet; started empty
    Fresh,
}

pub struct Library {
    catalog: Catalog,
    roster: Roster,
    ledger: LoanLedger,
    storage: Box<dyn LibraryStorage>,
    origin: DataOrigin,
}

impl Library {
    /// Create a library backed by `storage` and load whatever it holds.
    /// Corrupt stored data is returned as an error; the caller should not go on.
    pub fn open(storage: impl LibraryStorage + 'static) -> AppResult<Self> {
        let mut library = Self {
            catalog: Catalog::new(),
            roster: Roster::new(),
            ledger: LoanLedger::new(),
            storage: Box::new(storage),
            origin: DataOrigin::Fresh,
        };
        library.load_all()?;
        Ok(library)
    }

    pub fn origin(&self) -> DataOrigin {
        self.origin
    }

    pub fn storage_location(&self) -> String {
        self.storage.location()
    }

    /// Replace the in-memory state with the stored one
    pub fn load_all(&mut self) -> AppResult<DataOrigin> {
        let (state, origin) = match self.storage.load()? {
            Some(state) => (state, DataOrigin::Storage),
            None => (LibraryState::default(), DataOrigin::Fresh),
        };

        let LibraryState {
            items,
            patrons,
            history,
        } = state;
        let catalog = Catalog::from_items(items)?;
        let roster = Roster::from_patrons(patrons)?;
        self.catalog = catalog;
        self.roster = roster;
        self.ledger = LoanLedger::from_history(history);
        self.origin = origin;
        Ok(origin)
    }

    /// Write the whole in-memory state to storage
    pub fn save_all(&self) -> AppResult<()> {
        self.storage.save(&self.snapshot())
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> LibraryState {
        LibraryState {
            items: self.catalog.list().to_vec(),
            patrons: self.roster.list().to_vec(),
            history: self.ledger.history().to_vec(),
        }
    }

    // Catalog

    pub fn add_item(&mut self, title: &str, author: &str, year: &str) -> AppResult<&Item> {
        self.catalog.add(title, author, year)
    }

    pub fn remove_item(&mut self, id: ItemId) -> AppResult<Item> {
        self.catalog.remove(id)
    }

    pub fn list_items(&self) -> &[Item] {
        self.catalog.list()
    }

    pub fn get_item(&self, id: ItemId) -> Option<&Item> {
        self.catalog.get(id)
    }

    pub fn find_items(&self, field: SearchField, value: &str) -> Vec<&Item> {
        self.catalog.find_by(field, value)
    }

    // Roster

    pub fn add_patron(&mut self, first_name: &str, last_name: &str) -> AppResult<&Patron> {
        self.roster.add(first_name, last_name)
    }

    pub fn list_patrons(&self) -> &[Patron] {
        self.roster.list()
    }

    /// Items a patron currently holds, in borrowing order
    pub fn patron_loans(&self, patron_id: PatronId) -> AppResult<Vec<&Item>> {
        let patron = self.roster.require(patron_id)?;
        patron
            .active_loans
            .iter()
            .map(|&id| {
                self.catalog.get(id).ok_or_else(|| {
                    AppError::NotFound(format!("Item with id {} not found", id))
                })
            })
            .collect()
    }

    // Loans

    pub fn checkout(&mut self, item_id: &str, patron_id: &str) -> AppResult<LoanReceipt> {
        self.ledger
            .checkout(&mut self.catalog, &mut self.roster, item_id, patron_id)
    }

    pub fn checkin(&mut self, item_id: &str, patron_id: &str) -> AppResult<Item> {
        self.ledger
            .checkin(&mut self.catalog, &mut self.roster, item_id, patron_id)
    }

    pub fn history(&self) -> &[LoanRecord] {
        self.ledger.history()
    }
}
