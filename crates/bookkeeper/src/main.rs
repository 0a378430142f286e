//! bookkeeper - track your reading progress
//!
//! Wires together:
//! - Configuration loading
//! - Store initialization (SQLite, plus the legacy JSON file on demand)
//! - Command dispatch and rendering
//! - Weekly CSV export

mod app;
mod cli;
mod render;

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so command output stays clean
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "bookkeeper starting");

    if bookkeeper_util::is_mock_time_active() {
        warn!(now = %bookkeeper_util::now(), "Mock time is active");
    }

    let app = match App::from_args(&args) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "Startup failed");
            eprintln!("Error: {e:#}");
            return ExitCode::from(1);
        }
    };

    match app.run(&args.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
