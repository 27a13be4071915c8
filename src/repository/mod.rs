//! Persistence layer for the library data set

pub mod json_file;

pub use json_file::JsonFileStorage;

use crate::{error::AppResult, models::LibraryState};

/// Whole-state storage backend
#[cfg_attr(test, mockall::automock)]
pub trait LibraryStorage {
    /// Read the stored state. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> AppResult<Option<LibraryState>>;

    /// Overwrite the stored state
    fn save(&self, state: &LibraryState) -> AppResult<()>;

    /// Human-readable location, used in messages
    fn location(&self) -> String;
}
