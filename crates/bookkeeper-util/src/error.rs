//! Error taxonomy shared by every bookkeeper surface

use thiserror::Error;

/// User-facing error categories.
///
/// Each library crate has its own error enum; all of them collapse into one
/// of these categories at the presentation layer.
#[derive(Debug, Error)]
pub enum BookkeeperError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Export failed: {0}")]
    ExportFailure(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl BookkeeperError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageUnavailable(msg.into())
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::ExportFailure(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Process exit code for this category.
    ///
    /// Bad input exits with 2 (usage error); everything else exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, BookkeeperError>;
