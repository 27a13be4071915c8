//! Error types for Bibliotheca

use thiserror::Error;

/// Application error codes shown next to error messages in the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    ItemNotAvailable = 7,
    BadValue = 18,
    NoSuchData = 20,
    CorruptData = 22,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Corrupt data: {0}")]
    CorruptData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Numeric code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::NotFound(_) => ErrorCode::NoSuchData,
            AppError::Conflict(_) => ErrorCode::ItemNotAvailable,
            AppError::CorruptData(_) => ErrorCode::CorruptData,
            AppError::Io(_) => ErrorCode::Failure,
        }
    }

    /// Whether the session can go on after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::CorruptData(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            AppError::Io(e.into())
        } else {
            AppError::CorruptData(e.to_string())
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
