//! Legacy flat-file book manager
//!
//! The earliest storage format: a single JSON array of
//! `{title, total_pages, last_page}` objects. Titles are the key, there is no
//! event history, and the whole file is rewritten on every change.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{check_new_book, StoreError, StoreResult};

/// A book entry in the legacy JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyBook {
    pub title: String,
    pub total_pages: u32,
    #[serde(default)]
    pub last_page: u32,
}

/// Owns the in-memory copy of the legacy file for its whole lifetime
#[derive(Debug)]
pub struct LegacyBookManager {
    path: PathBuf,
    books: Vec<LegacyBook>,
}

impl LegacyBookManager {
    /// Load the collection from `path`, or start empty if the file does not exist
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let books = Self::load(&path)?;
        debug!(path = %path.display(), count = books.len(), "Legacy books loaded");
        Ok(Self { path, books })
    }

    fn load(path: &Path) -> StoreResult<Vec<LegacyBook>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn books(&self) -> &[LegacyBook] {
        &self.books
    }

    /// Rewrite the whole file from memory
    pub fn save(&self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.books)?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = self.books.len(), "Legacy books saved");
        Ok(())
    }

    /// Add a book unless one with the same title exists.
    ///
    /// Returns `false` when the title is already present; nothing is written.
    pub fn add_book(&mut self, title: &str, total_pages: u32) -> StoreResult<bool> {
        let title = check_new_book(title, total_pages)?;

        if self.books.iter().any(|b| b.title == title) {
            warn!(title = %title, "Legacy book already present, skipping");
            return Ok(false);
        }

        self.books.push(LegacyBook {
            title,
            total_pages,
            last_page: 0,
        });
        self.save()?;
        Ok(true)
    }

    /// Set the last page of the first book with this title.
    ///
    /// The title is trimmed the same way `add_book` trims it. Fails with
    /// `NotFound` if no book matches; the file is left untouched.
    pub fn update_page(&mut self, title: &str, page: u32) -> StoreResult<()> {
        let title = title.trim();
        let book = self
            .books
            .iter_mut()
            .find(|b| b.title == title)
            .ok_or_else(|| StoreError::NotFound(format!("legacy book '{title}'")))?;

        book.last_page = page;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_manager() -> (TempDir, LegacyBookManager) {
        let dir = tempfile::tempdir().unwrap();
        let manager = LegacyBookManager::open(dir.path().join("storage.json")).unwrap();
        (dir, manager)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (dir, manager) = temp_manager();
        assert!(manager.books().is_empty());
        assert!(!dir.path().join("storage.json").exists());
    }

    #[test]
    fn add_persists_and_reloads() {
        let (_dir, mut manager) = temp_manager();

        assert!(manager.add_book("Dune", 600).unwrap());
        assert!(manager.add_book("Emma", 400).unwrap());

        let reloaded = LegacyBookManager::open(manager.path()).unwrap();
        assert_eq!(reloaded.books(), manager.books());
        assert_eq!(reloaded.books()[0].last_page, 0);
    }

    #[test]
    fn duplicate_title_suppressed() {
        let (_dir, mut manager) = temp_manager();
        manager.add_book("Dune", 600).unwrap();

        let added = manager.add_book("Dune", 999).unwrap();

        assert!(!added);
        assert_eq!(manager.books().len(), 1);
        assert_eq!(manager.books()[0].total_pages, 600);
    }

    #[test]
    fn update_page_persists() {
        let (_dir, mut manager) = temp_manager();
        manager.add_book("Dune", 600).unwrap();

        manager.update_page("Dune", 321).unwrap();

        let reloaded = LegacyBookManager::open(manager.path()).unwrap();
        assert_eq!(reloaded.books()[0].last_page, 321);
    }

    #[test]
    fn update_page_matches_title_as_added() {
        let (_dir, mut manager) = temp_manager();
        manager.add_book(" Dune ", 600).unwrap();

        manager.update_page(" Dune ", 10).unwrap();
        manager.update_page("Dune", 20).unwrap();

        assert_eq!(manager.books()[0].title, "Dune");
        let reloaded = LegacyBookManager::open(manager.path()).unwrap();
        assert_eq!(reloaded.books()[0].last_page, 20);
    }

    #[test]
    fn padded_duplicate_title_suppressed() {
        let (_dir, mut manager) = temp_manager();
        manager.add_book("Dune", 600).unwrap();

        assert!(!manager.add_book("  Dune", 600).unwrap());
        assert_eq!(manager.books().len(), 1);
    }

    #[test]
    fn update_unknown_title_leaves_file_unchanged() {
        let (_dir, mut manager) = temp_manager();
        manager.add_book("Dune", 600).unwrap();
        let before = std::fs::read(manager.path()).unwrap();

        let result = manager.update_page("Emma", 10);

        assert!(matches!(result, Err(StoreError::NotFound(_))));
        assert_eq!(std::fs::read(manager.path()).unwrap(), before);
    }

    #[test]
    fn reads_files_without_last_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, r#"[{"title": "Dune", "total_pages": 600}]"#).unwrap();

        let manager = LegacyBookManager::open(&path).unwrap();
        assert_eq!(manager.books()[0].last_page, 0);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = LegacyBookManager::open(&path);
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn file_is_a_pretty_json_array() {
        let (_dir, mut manager) = temp_manager();
        manager.add_book("Dune", 600).unwrap();

        let content = std::fs::read_to_string(manager.path()).unwrap();
        assert!(content.starts_with("[\n  {"));
        assert!(content.contains("\"last_page\": 0"));
    }
}
