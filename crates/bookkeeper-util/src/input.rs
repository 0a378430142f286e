//! Parsing of user-entered values
//!
//! Input is checked here, before any storage operation is attempted.

use crate::{BookkeeperError, Result};

/// Trim a title and reject it if nothing is left.
pub fn parse_title(input: &str) -> Result<String> {
    let title = input.trim();
    if title.is_empty() {
        return Err(BookkeeperError::invalid_input("Please enter a book title"));
    }
    Ok(title.to_string())
}

/// Parse a total page count. Must be a whole number greater than 0.
pub fn parse_total_pages(input: &str) -> Result<u32> {
    let pages: i64 = input.trim().parse().map_err(|_| {
        BookkeeperError::invalid_input(format!(
            "'{}' is not a valid number for total pages",
            input.trim()
        ))
    })?;

    if pages <= 0 {
        return Err(BookkeeperError::invalid_input(
            "Total pages must be greater than 0",
        ));
    }

    u32::try_from(pages)
        .map_err(|_| BookkeeperError::invalid_input(format!("Total pages {pages} is too large")))
}

/// Parse a page position. Must be a whole number, 0 or greater.
pub fn parse_page(input: &str) -> Result<u32> {
    let page: i64 = input.trim().parse().map_err(|_| {
        BookkeeperError::invalid_input(format!(
            "'{}' is not a valid page number",
            input.trim()
        ))
    })?;

    if page < 0 {
        return Err(BookkeeperError::invalid_input(
            "Page number cannot be negative",
        ));
    }

    u32::try_from(page)
        .map_err(|_| BookkeeperError::invalid_input(format!("Page number {page} is too large")))
}
