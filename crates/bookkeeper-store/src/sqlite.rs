//! SQLite-based store implementation

use bookkeeper_util::{window_start, BookId};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{check_new_book, Book, ProgressEvent, Store, StoreError, StoreResult};

/// SQLite-based store.
///
/// Holds only the database path. Every operation opens its own connection,
/// which is closed when it goes out of scope, on success and error paths alike.
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open or create a store at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.initialize()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> StoreResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }

    /// Create the tables if they are missing. Safe to call on an existing file.
    pub fn initialize(&self) -> StoreResult<()> {
        let conn = self.connect()?;

        conn.execute_batch(
            r#"
            -- Books
            CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                total_pages INTEGER NOT NULL,
                current_page INTEGER NOT NULL DEFAULT 0
            );

            -- Progress events (append-only)
            CREATE TABLE IF NOT EXISTS updates (
                id INTEGER PRIMARY KEY,
                book_id INTEGER NOT NULL,
                page INTEGER NOT NULL,
                timestamp TEXT NOT NULL,
                FOREIGN KEY(book_id) REFERENCES books(id)
            );

            -- Indexes
            CREATE INDEX IF NOT EXISTS idx_updates_timestamp ON updates(timestamp);
            "#,
        )?;

        debug!(path = %self.path.display(), "Store schema initialized");
        Ok(())
    }
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: BookId::new(row.get(0)?),
        title: row.get(1)?,
        total_pages: row.get(2)?,
        current_page: row.get(3)?,
    })
}

/// Accepts RFC 3339 and offset-less ISO 8601 local timestamps
/// (`2025-12-25T14:30:00.123456`), as written by older versions of the app.
fn parse_timestamp(event_id: i64, raw: &str) -> StoreResult<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map_err(|e| {
        StoreError::Serialization(format!("event {event_id} has bad timestamp '{raw}': {e}"))
    })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| {
            StoreError::Serialization(format!(
                "event {event_id} has timestamp '{raw}' that does not exist in local time"
            ))
        })
}

impl Store for SqliteStore {
    fn add_book(&self, title: &str, total_pages: u32) -> StoreResult<BookId> {
        let title = check_new_book(title, total_pages)?;
        let conn = self.connect()?;

        conn.execute(
            "INSERT INTO books (title, total_pages, current_page) VALUES (?, ?, 0)",
            params![title, total_pages],
        )?;

        let id = BookId::new(conn.last_insert_rowid());
        debug!(book_id = %id, title = %title, total_pages, "Book added");
        Ok(id)
    }

    fn list_books(&self) -> StoreResult<Vec<Book>> {
        let conn = self.connect()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, total_pages, current_page FROM books ORDER BY id",
        )?;

        let books = stmt
            .query_map([], book_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(books)
    }

    fn get_book(&self, id: BookId) -> StoreResult<Option<Book>> {
        let conn = self.connect()?;

        let book = conn
            .query_row(
                "SELECT id, title, total_pages, current_page FROM books WHERE id = ?",
                [id.as_i64()],
                book_from_row,
            )
            .optional()?;

        Ok(book)
    }

    fn record_progress_at(
        &self,
        id: BookId,
        page: u32,
        at: DateTime<Local>,
    ) -> StoreResult<ProgressEvent> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let updated = tx.execute(
            "UPDATE books SET current_page = ? WHERE id = ?",
            params![page, id.as_i64()],
        )?;

        if updated == 0 {
            // Dropping the transaction rolls it back
            warn!(book_id = %id, page, "Progress for unknown book rejected");
            return Err(StoreError::NotFound(format!("book {id}")));
        }

        tx.execute(
            "INSERT INTO updates (book_id, page, timestamp) VALUES (?, ?, ?)",
            params![id.as_i64(), page, at.to_rfc3339()],
        )?;
        let event_id = tx.last_insert_rowid();

        tx.commit()?;

        debug!(book_id = %id, page, event_id, "Progress recorded");
        Ok(ProgressEvent {
            id: event_id,
            book_id: id,
            page,
            timestamp: at,
        })
    }

    fn events_in_window(
        &self,
        now: DateTime<Local>,
        days: u32,
    ) -> StoreResult<Vec<ProgressEvent>> {
        let conn = self.connect()?;
        let first_day = window_start(&now, days).format("%Y-%m-%d").to_string();
        let last_day = now.date_naive().format("%Y-%m-%d").to_string();

        // Timestamps are ISO 8601 in local time (with or without an offset),
        // so the first ten characters are the local calendar date.
        let mut stmt = conn.prepare(
            r#"
            SELECT id, book_id, page, timestamp FROM updates
            WHERE substr(timestamp, 1, 10) BETWEEN ? AND ?
            ORDER BY id
            "#,
        )?;

        let rows = stmt
            .query_map(params![first_day, last_day], |row| {
                let id: i64 = row.get(0)?;
                let book_id: i64 = row.get(1)?;
                let page: u32 = row.get(2)?;
                let timestamp: String = row.get(3)?;
                Ok((id, book_id, page, timestamp))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let events = rows
            .into_iter()
            .map(|(id, book_id, page, timestamp)| {
                Ok(ProgressEvent {
                    id,
                    book_id: BookId::new(book_id),
                    page,
                    timestamp: parse_timestamp(id, &timestamp)?,
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        debug!(first_day = %first_day, count = events.len(), "Window events loaded");
        Ok(events)
    }

    fn is_healthy(&self) -> bool {
        match self.connect() {
            Ok(conn) => conn.query_row("SELECT 1", [], |_| Ok(())).is_ok(),
            Err(e) => {
                warn!(error = %e, "Store unreachable");
                false
            }
        }
    }
}
