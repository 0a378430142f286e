//! Book and progress event records

use bookkeeper_util::BookId;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A tracked book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub total_pages: u32,

    /// Cache of the page recorded by the latest progress event
    pub current_page: u32,
}

impl Book {
    /// Percentage read, rounded to the nearest whole number.
    ///
    /// A book with zero total pages reports 0%. Not clamped: reading past the
    /// stated page count reports more than 100%.
    pub fn percent_complete(&self) -> u32 {
        if self.total_pages == 0 {
            return 0;
        }
        let ratio = f64::from(self.current_page) / f64::from(self.total_pages);
        (ratio * 100.0).round() as u32
    }

    /// Pages left to read, or `None` once the book is finished.
    pub fn pages_remaining(&self) -> Option<u32> {
        self.total_pages
            .checked_sub(self.current_page)
            .filter(|&left| left > 0)
    }

    pub fn is_finished(&self) -> bool {
        self.pages_remaining().is_none()
    }
}

/// One recorded page update. Never modified after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub id: i64,
    pub book_id: BookId,
    pub page: u32,
    pub timestamp: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(total_pages: u32, current_page: u32) -> Book {
        Book {
            id: BookId::new(1),
            title: "Dune".into(),
            total_pages,
            current_page,
        }
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(book(600, 150).percent_complete(), 25);
        assert_eq!(book(3, 1).percent_complete(), 33);
        assert_eq!(book(3, 2).percent_complete(), 67);
        assert_eq!(book(600, 600).percent_complete(), 100);
    }

    #[test]
    fn zero_total_pages_is_zero_percent() {
        assert_eq!(book(0, 10).percent_complete(), 0);
    }

    #[test]
    fn remaining_suppressed_when_done() {
        assert_eq!(book(600, 150).pages_remaining(), Some(450));
        assert_eq!(book(600, 600).pages_remaining(), None);
        assert_eq!(book(600, 650).pages_remaining(), None);
        assert!(book(600, 600).is_finished());
    }
}
