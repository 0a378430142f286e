//! Validated configuration with defaults applied

use crate::schema::RawConfig;
use bookkeeper_util::{
    default_data_dir, export_dir_for, DEFAULT_DATABASE_FILE, DEFAULT_EXPORT_FILE,
    DEFAULT_LEGACY_FILE, WEEKLY_WINDOW_DAYS,
};
use std::path::PathBuf;

/// Validated configuration ready for use
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub database_file: String,
    pub legacy_file: String,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub export_dir: PathBuf,
    pub file_name: String,
    pub window_days: u32,
}

impl Config {
    /// Convert from raw config (after validation)
    pub fn from_raw(raw: RawConfig) -> Self {
        let data_dir = raw.storage.data_dir.unwrap_or_else(default_data_dir);
        let export_dir = raw
            .report
            .export_dir
            .unwrap_or_else(|| export_dir_for(&data_dir));

        Self {
            storage: StorageConfig {
                database_file: raw
                    .storage
                    .database_file
                    .unwrap_or_else(|| DEFAULT_DATABASE_FILE.into()),
                legacy_file: raw
                    .storage
                    .legacy_file
                    .unwrap_or_else(|| DEFAULT_LEGACY_FILE.into()),
                data_dir,
            },
            report: ReportConfig {
                export_dir,
                file_name: raw
                    .report
                    .file_name
                    .unwrap_or_else(|| DEFAULT_EXPORT_FILE.into()),
                window_days: raw.report.window_days.unwrap_or(WEEKLY_WINDOW_DAYS),
            },
        }
    }

    /// Point storage (and a defaulted export dir) at another data directory.
    ///
    /// An explicitly configured export directory is kept.
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        if self.report.export_dir == export_dir_for(&self.storage.data_dir) {
            self.report.export_dir = export_dir_for(&data_dir);
        }
        self.storage.data_dir = data_dir;
        self
    }

    pub fn database_path(&self) -> PathBuf {
        self.storage.data_dir.join(&self.storage.database_file)
    }

    pub fn legacy_path(&self) -> PathBuf {
        self.storage.data_dir.join(&self.storage.legacy_file)
    }

    pub fn export_path(&self) -> PathBuf {
        self.report.export_dir.join(&self.report.file_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_raw(RawConfig {
            config_version: crate::CURRENT_CONFIG_VERSION,
            storage: Default::default(),
            report: Default::default(),
        })
    }
}
