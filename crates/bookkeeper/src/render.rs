//! Text rendering of books and progress events

use bookkeeper_store::{Book, LegacyBook, ProgressEvent};
use bookkeeper_util::{format_datetime_full, BookId};
use std::collections::HashMap;
use std::fmt::Write;

/// Titles longer than this are cut and end with "..."
const TITLE_DISPLAY_LEN: usize = 40;

const BAR_WIDTH: usize = 20;

const EMPTY_MESSAGE: &str = "No books yet!\nRun `bookkeeper add <TITLE> <PAGES>` to get started";

pub fn truncate_title(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        return title.to_string();
    }
    let cut: String = title.chars().take(max).collect();
    format!("{cut}...")
}

/// Fixed-width bar; over-read books show a full bar
pub fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn book_card(book: &Book) -> String {
    let percent = book.percent_complete();
    let mut card = format!(
        "#{} {}\n  {} {}%\n  Progress: {} / {} pages",
        book.id,
        truncate_title(&book.title, TITLE_DISPLAY_LEN),
        progress_bar(percent),
        percent,
        book.current_page,
        book.total_pages,
    );
    if book.is_finished() {
        card.push_str("  Finished!");
    } else if let Some(left) = book.pages_remaining() {
        let _ = write!(card, "  ({left} pages left)");
    }
    card
}

pub fn book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    books.iter().map(book_card).collect::<Vec<_>>().join("\n\n")
}

pub fn legacy_list(books: &[LegacyBook]) -> String {
    if books.is_empty() {
        return "No legacy books".to_string();
    }
    books
        .iter()
        .map(|b| {
            format!(
                "{}  {} / {} pages",
                truncate_title(&b.title, TITLE_DISPLAY_LEN),
                b.last_page,
                b.total_pages
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per event, newest last, with the book title where known
pub fn event_list(events: &[ProgressEvent], books: &[Book], window_days: u32) -> String {
    if events.is_empty() {
        return format!("No progress recorded in the last {window_days} days");
    }
    let titles: HashMap<BookId, &str> = books.iter().map(|b| (b.id, b.title.as_str())).collect();

    events
        .iter()
        .map(|e| {
            let title = titles.get(&e.book_id).copied().unwrap_or("(unknown book)");
            format!(
                "{}  #{} {}  page {}",
                format_datetime_full(&e.timestamp),
                e.book_id,
                truncate_title(title, TITLE_DISPLAY_LEN),
                e.page
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
