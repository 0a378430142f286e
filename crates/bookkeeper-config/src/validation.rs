//! Configuration validation

use crate::schema::RawConfig;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("[storage] {field}: {message}")]
    StorageError { field: String, message: String },

    #[error("[report] {field}: {message}")]
    ReportError { field: String, message: String },
}

/// Validate a raw configuration, collecting every problem found
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("database_file", &config.storage.database_file),
        ("legacy_file", &config.storage.legacy_file),
    ] {
        if let Some(message) = value.as_deref().and_then(check_file_name) {
            errors.push(ValidationError::StorageError {
                field: field.into(),
                message,
            });
        }
    }

    if let (Some(db), Some(legacy)) = (&config.storage.database_file, &config.storage.legacy_file)
    {
        if db == legacy {
            errors.push(ValidationError::StorageError {
                field: "legacy_file".into(),
                message: "must differ from database_file".into(),
            });
        }
    }

    if let Some(message) = config.report.file_name.as_deref().and_then(check_file_name) {
        errors.push(ValidationError::ReportError {
            field: "file_name".into(),
            message,
        });
    }

    if config.report.window_days == Some(0) {
        errors.push(ValidationError::ReportError {
            field: "window_days".into(),
            message: "must be at least 1".into(),
        });
    }

    errors
}

fn check_file_name(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("cannot be empty".into());
    }
    if name.contains('/') || name.contains('\\') {
        return Some(format!("'{name}' must be a plain file name, not a path"));
    }
    None
}
