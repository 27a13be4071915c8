//! JSON file storage
//!
//! The file keeps the layout used by earlier versions of the program: items,
//! patrons and history under `ksiazki`, `uzytkownicy` and `historia`, with each
//! patron embedding full copies of the items it holds. In memory a patron only
//! keeps item ids, so on load the embedded copies are matched back to the
//! catalog and the catalog copy wins.

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::{HashMap, HashSet};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{
    error::{AppError, AppResult},
    models::{
        item::{Item, ItemId},
        loan::LoanRecord,
        patron::{Patron, PatronId},
        LibraryState,
    },
};

use super::LibraryStorage;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredLibrary {
    #[serde(rename = "ksiazki", default)]
    items: Vec<Item>,
    #[serde(rename = "uzytkownicy", default)]
    patrons: Vec<StoredPatron>,
    #[serde(rename = "historia", default)]
    history: Vec<LoanRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPatron {
    #[serde(rename = "id_uzytkownika")]
    id: PatronId,
    #[serde(rename = "imie")]
    first_name: String,
    #[serde(rename = "nazwisko")]
    last_name: String,
    #[serde(rename = "wypozyczone_ksiazki", default)]
    loans: Vec<Item>,
}

impl StoredLibrary {
    fn from_state(state: &LibraryState) -> AppResult<Self> {
        let by_id: HashMap<ItemId, &Item> = state.items.iter().map(|i| (i.id, i)).collect();

        let patrons = state
            .patrons
            .iter()
            .map(|patron| -> AppResult<StoredPatron> {
                let loans = patron
                    .active_loans
                    .iter()
                    .map(|id| {
                        by_id.get(id).map(|item| (*item).clone()).ok_or_else(|| {
                            AppError::CorruptData(format!(
                                "Patron {} holds item {} which is not in the catalog",
                                patron.id, id
                            ))
                        })
                    })
                    .collect::<AppResult<Vec<_>>>()?;
                Ok(StoredPatron {
                    id: patron.id,
                    first_name: patron.first_name.clone(),
                    last_name: patron.last_name.clone(),
                    loans,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            items: state.items.clone(),
            patrons,
            history: state.history.clone(),
        })
    }

    fn into_state(self) -> AppResult<LibraryState> {
        let StoredLibrary {
            items,
            patrons: stored_patrons,
            history,
        } = self;

        let mut by_id: HashMap<ItemId, &Item> = HashMap::with_capacity(items.len());
        for item in &items {
            if !item.is_consistent() {
                return Err(AppError::CorruptData(format!(
                    "Item {} has a due date that does not match its loan status",
                    item.id
                )));
            }
            if by_id.insert(item.id, item).is_some() {
                return Err(AppError::CorruptData(format!("Duplicate item id {}", item.id)));
            }
        }

        let mut patron_ids = HashSet::with_capacity(stored_patrons.len());
        let mut holders: HashMap<ItemId, PatronId> = HashMap::new();
        let mut patrons = Vec::with_capacity(stored_patrons.len());

        for stored in stored_patrons {
            if !patron_ids.insert(stored.id) {
                return Err(AppError::CorruptData(format!("Duplicate patron id {}", stored.id)));
            }

            let mut active_loans = Vec::with_capacity(stored.loans.len());
            for copy in &stored.loans {
                let item = by_id.get(&copy.id).ok_or_else(|| {
                    AppError::CorruptData(format!(
                        "Patron {} holds item {} which is not in the catalog",
                        stored.id, copy.id
                    ))
                })?;
                if !item.on_loan {
                    return Err(AppError::CorruptData(format!(
                        "Patron {} holds item {} which is not on loan",
                        stored.id, copy.id
                    )));
                }
                if let Some(other) = holders.insert(copy.id, stored.id) {
                    return Err(AppError::CorruptData(format!(
                        "Item {} is held by both patron {} and patron {}",
                        copy.id, other, stored.id
                    )));
                }
                if *item != copy {
                    tracing::warn!(
                        "Patron {} has a stale copy of item {}; using the catalog entry",
                        stored.id,
                        copy.id
                    );
                }
                active_loans.push(copy.id);
            }

            patrons.push(Patron {
                id: stored.id,
                first_name: stored.first_name,
                last_name: stored.last_name,
                active_loans,
            });
        }

        for item in items.iter().filter(|i| i.on_loan && !holders.contains_key(&i.id)) {
            tracing::warn!("Item {} '{}' is on loan but no patron holds it", item.id, item.title);
        }

        Ok(LibraryState {
            items,
            patrons,
            history,
        })
    }
}

/// Stores the whole library as one pretty-printed JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LibraryStorage for JsonFileStorage {
    fn load(&self) -> AppResult<Option<LibraryState>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No data file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredLibrary = serde_json::from_str(&contents)?;
        let state = stored.into_state()?;
        tracing::info!(
            "Loaded {} item(s), {} patron(s), {} history entries from {}",
            state.items.len(),
            state.patrons.len(),
            state.history.len(),
            self.path.display()
        );
        Ok(Some(state))
    }

    fn save(&self, state: &LibraryState) -> AppResult<()> {
        let stored = StoredLibrary::from_state(state)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut writer, formatter);
        stored.serialize(&mut serializer)?;
        writer.flush()?;

        tracing::info!(
            "Saved {} item(s), {} patron(s), {} history entries to {}",
            state.items.len(),
            state.patrons.len(),
            state.history.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
