//! Shared utilities for bookkeeper
//!
//! This crate provides:
//! - ID types (BookId)
//! - Time utilities (wall-clock now with debug mock time, window helpers)
//! - The user-facing error taxonomy
//! - Parsing of user-entered titles and page numbers
//! - Default paths for config, data, and export directories

mod error;
mod ids;
mod input;
mod paths;
mod time;

pub use error::*;
pub use ids::*;
pub use input::*;
pub use paths::*;
pub use time::*;
