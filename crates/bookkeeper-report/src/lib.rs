//! Weekly progress report
//!
//! Projects the store's recent progress events into a CSV file with the
//! columns `Book ID,Page,Timestamp`.

use bookkeeper_config::ReportConfig;
use bookkeeper_store::{ProgressEvent, Store, StoreError};
use bookkeeper_util::{now, BookkeeperError, DEFAULT_EXPORT_FILE, WEEKLY_WINDOW_DAYS};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Column headers of the report
pub const REPORT_HEADER: [&str; 3] = ["Book ID", "Page", "Timestamp"];

/// Report errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Export directory does not exist: {}", .0.display())]
    ExportDirMissing(PathBuf),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ReportError> for BookkeeperError {
    fn from(e: ReportError) -> Self {
        match e {
            ReportError::Store(store) => store.into(),
            other => BookkeeperError::export(other.to_string()),
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,

    /// Data rows written, not counting the header
    pub rows: usize,
}

/// Writes the trailing-window report for a store
pub struct ReportGenerator<'a> {
    store: &'a dyn Store,
    export_dir: PathBuf,
    file_name: String,
    window_days: u32,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(store: &'a dyn Store, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            export_dir: export_dir.into(),
            file_name: DEFAULT_EXPORT_FILE.into(),
            window_days: WEEKLY_WINDOW_DAYS,
        }
    }

    pub fn from_config(store: &'a dyn Store, config: &ReportConfig) -> Self {
        Self {
            store,
            export_dir: config.export_dir.clone(),
            file_name: config.file_name.clone(),
            window_days: config.window_days,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.export_dir.join(&self.file_name)
    }

    /// Export the trailing week (or configured window) ending now.
    ///
    /// Overwrites any previous report. The export directory must already exist.
    pub fn export_weekly_csv(&self) -> ReportResult<ExportSummary> {
        self.export_at(now())
    }

    /// Export the window ending at `now`
    pub fn export_at(&self, now: DateTime<Local>) -> ReportResult<ExportSummary> {
        if !self.export_dir.is_dir() {
            return Err(ReportError::ExportDirMissing(self.export_dir.clone()));
        }

        let events = self.store.events_in_window(now, self.window_days)?;
        let path = self.output_path();
        write_events(&path, &events)?;

        info!(
            path = %path.display(),
            rows = events.len(),
            window_days = self.window_days,
            "Weekly report exported"
        );

        Ok(ExportSummary {
            path,
            rows: events.len(),
        })
    }
}

/// Write the header and one row per event to `path`
pub fn write_events(path: &Path, events: &[ProgressEvent]) -> ReportResult<()> {
    let file = std::fs::File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(REPORT_HEADER)?;
    for event in events {
        writer.write_record([
            event.book_id.to_string(),
            event.page.to_string(),
            event.timestamp.to_rfc3339(),
        ])?;
    }

    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), rows = events.len(), "CSV written");
    Ok(())
}
