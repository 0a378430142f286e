//! Persistence layer for bookkeeper
//!
//! Provides:
//! - SQLite store of books and their append-only progress events
//! - Weekly-window queries over the event log
//! - The legacy flat-file JSON manager, keyed by title

mod legacy;
mod models;
mod sqlite;
mod traits;

pub use legacy::*;
pub use models::*;
pub use sqlite::*;
pub use traits::*;

use bookkeeper_util::BookkeeperError;
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

impl From<StoreError> for BookkeeperError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(msg) => BookkeeperError::NotFound(msg),
            StoreError::InvalidInput(msg) => BookkeeperError::InvalidInput(msg),
            other => BookkeeperError::storage(other.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Shared checks for book creation in both persistence strategies
pub(crate) fn check_new_book(title: &str, total_pages: u32) -> StoreResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(StoreError::InvalidInput("title cannot be empty".into()));
    }
    if total_pages == 0 {
        return Err(StoreError::InvalidInput(
            "total pages must be greater than 0".into(),
        ));
    }
    Ok(title.to_string())
}
