//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Where books and progress are persisted
    #[serde(default)]
    pub storage: RawStorageConfig,

    /// Weekly report settings
    #[serde(default)]
    pub report: RawReportConfig,
}

/// Storage settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawStorageConfig {
    /// Data directory (default: ~/.local/share/bookkeeper)
    pub data_dir: Option<PathBuf>,

    /// SQLite database file name, relative to data_dir
    pub database_file: Option<String>,

    /// Legacy JSON file name, relative to data_dir
    pub legacy_file: Option<String>,
}

/// Report settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawReportConfig {
    /// Export directory (default: <data_dir>/exports)
    pub export_dir: Option<PathBuf>,

    /// Report file name within export_dir
    pub file_name: Option<String>,

    /// Trailing window length in days
    pub window_days: Option<u32>,
}
