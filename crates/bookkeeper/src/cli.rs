//! Command-line definitions

use bookkeeper_util::default_config_path;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bookkeeper - Track your reading progress
#[derive(Parser, Debug)]
#[command(name = "bookkeeper")]
#[command(about = "Track your reading progress", long_about = None)]
pub struct Args {
    /// Configuration file path (default: ~/.config/bookkeeper/config.toml)
    #[arg(short, long, default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Data directory override (or set BOOKKEEPER_DATA_DIR env var)
    #[arg(short, long, env = "BOOKKEEPER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

// Numbers are taken as text so bad input is reported by our own validation.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new book
    Add {
        /// Book title
        title: String,

        /// Total number of pages
        total_pages: String,
    },

    /// Show every book with its progress
    List,

    /// Record the page you have reached in a book
    Update {
        /// Book id, as shown by `list`
        book_id: String,

        /// Current page
        page: String,
    },

    /// Show progress updates from the report window (default: last 7 days)
    Week,

    /// Export progress updates from the report window to CSV
    Export,

    /// Work with the legacy JSON book file
    Legacy {
        #[command(subcommand)]
        command: LegacyCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum LegacyCommands {
    /// Show every legacy book
    List,

    /// Add a book unless the title is already present
    Add { title: String, total_pages: String },

    /// Set the last page read for a title
    Update { title: String, page: String },
}
