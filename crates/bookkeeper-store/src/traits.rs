//! Store trait definitions

use bookkeeper_util::{now, BookId, WEEKLY_WINDOW_DAYS};
use chrono::{DateTime, Local};

use crate::{Book, ProgressEvent, StoreResult};

/// Durable record of books and their progress history
pub trait Store: Send + Sync {
    // Books

    /// Insert a new book with `current_page = 0`. Titles need not be unique.
    fn add_book(&self, title: &str, total_pages: u32) -> StoreResult<BookId>;

    /// All books, in insertion order
    fn list_books(&self) -> StoreResult<Vec<Book>>;

    /// Look up a single book
    fn get_book(&self, id: BookId) -> StoreResult<Option<Book>>;

    // Progress

    /// Set the book's current page and append a progress event stamped `at`.
    ///
    /// Both writes happen or neither does. Fails with `NotFound` if no book
    /// has this id.
    fn record_progress_at(
        &self,
        id: BookId,
        page: u32,
        at: DateTime<Local>,
    ) -> StoreResult<ProgressEvent>;

    /// Record progress stamped with the current time
    fn record_progress(&self, id: BookId, page: u32) -> StoreResult<ProgressEvent> {
        self.record_progress_at(id, page, now())
    }

    // Aggregation

    /// Events dated within the trailing `days` calendar days ending at `now`,
    /// both ends inclusive
    fn events_in_window(
        &self,
        now: DateTime<Local>,
        days: u32,
    ) -> StoreResult<Vec<ProgressEvent>>;

    /// Events from the trailing week, measured from the current time
    fn weekly_events(&self) -> StoreResult<Vec<ProgressEvent>> {
        self.events_in_window(now(), WEEKLY_WINDOW_DAYS)
    }

    // Health

    /// Check if store is healthy
    fn is_healthy(&self) -> bool;
}
