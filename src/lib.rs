//! Bibliotheca - small library lending tracker
//!
//! Keeps a catalog of books, a roster of patrons and a checkout history in
//! memory, persists them to a JSON file, and drives everything from an
//! interactive text menu.

pub mod config;
pub mod error;
pub mod library;
pub mod models;
pub mod repository;
pub mod services;
pub mod shell;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use library::{DataOrigin, Library};
