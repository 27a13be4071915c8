//! Integration tests for the library facade and file storage

mod library_tests;
mod persistence_tests;

use bibliotheca::{repository::JsonFileStorage, Library};
use tempfile::TempDir;

/// Library backed by a data file inside a fresh temporary directory
pub fn temp_library() -> (TempDir, Library) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let library = Library::open(JsonFileStorage::new(dir.path().join("test_data.json")))
        .expect("Failed to open library");
    (dir, library)
}
