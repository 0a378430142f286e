//! Integration tests for bookkeeper
//!
//! These tests exercise config, store, and report together the way the
//! command-line front end wires them.

use bookkeeper_config::{parse_config, Config};
use bookkeeper_report::ReportGenerator;
use bookkeeper_store::{LegacyBookManager, SqliteStore, Store, StoreError};
use bookkeeper_util::BookId;
use chrono::{Duration, Local, TimeZone};
use tempfile::TempDir;

fn setup() -> (TempDir, Config, SqliteStore) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_data_dir(dir.path().to_path_buf());
    std::fs::create_dir_all(&config.report.export_dir).unwrap();
    let store = SqliteStore::open(config.database_path()).unwrap();
    (dir, config, store)
}

#[test]
fn test_dune_reading_session() {
    let (_dir, _config, store) = setup();

    let id = store.add_book("Dune", 600).unwrap();

    store.record_progress(id, 150).unwrap();
    let book = store
        .list_books()
        .unwrap()
        .into_iter()
        .find(|b| b.id == id)
        .unwrap();
    assert_eq!(book.current_page, 150);
    assert_eq!(book.percent_complete(), 25);
    assert_eq!(book.pages_remaining(), Some(450));

    store.record_progress(id, 600).unwrap();
    let book = store.get_book(id).unwrap().unwrap();
    assert_eq!(book.percent_complete(), 100);
    assert_eq!(book.pages_remaining(), None);

    let pages: Vec<u32> = store.weekly_events().unwrap().iter().map(|e| e.page).collect();
    assert_eq!(pages, vec![150, 600]);
}

#[test]
fn test_add_book_adds_exactly_one() {
    let (_dir, _config, store) = setup();
    store.add_book("Emma", 400).unwrap();
    let before = store.list_books().unwrap().len();

    store.add_book("Persuasion", 250).unwrap();

    let books = store.list_books().unwrap();
    assert_eq!(books.len(), before + 1);
    let added = books.last().unwrap();
    assert_eq!(added.title, "Persuasion");
    assert_eq!(added.current_page, 0);
}

#[test]
fn test_export_matches_weekly_events() {
    let (_dir, config, store) = setup();
    let dune = store.add_book("Dune", 600).unwrap();
    let emma = store.add_book("Emma", 400).unwrap();
    store.record_progress(dune, 50).unwrap();
    store.record_progress(emma, 20).unwrap();
    store.record_progress(dune, 90).unwrap();

    let summary = ReportGenerator::from_config(&store, &config.report)
        .export_weekly_csv()
        .unwrap();

    let events = store.weekly_events().unwrap();
    let content = std::fs::read_to_string(&summary.path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(summary.path, config.export_path());
    assert_eq!(lines.len(), events.len() + 1);
    assert_eq!(lines[0], "Book ID,Page,Timestamp");
    assert_eq!(lines[3], format!("{dune},90,{}", events[2].timestamp.to_rfc3339()));
}

#[test]
fn test_weekly_window_from_fixed_now() {
    let (_dir, _config, store) = setup();
    let id = store.add_book("Dune", 600).unwrap();
    let now = Local.with_ymd_and_hms(2025, 6, 15, 9, 30, 0).unwrap();

    store
        .record_progress_at(id, 100, now - Duration::days(8))
        .unwrap();
    store
        .record_progress_at(id, 200, now - Duration::days(7))
        .unwrap();
    store
        .record_progress_at(id, 300, now - Duration::hours(1))
        .unwrap();

    let pages: Vec<u32> = store
        .events_in_window(now, 7)
        .unwrap()
        .iter()
        .map(|e| e.page)
        .collect();
    assert_eq!(pages, vec![200, 300]);
}

#[test]
fn test_missing_book_leaves_log_untouched() {
    let (_dir, _config, store) = setup();
    store.add_book("Dune", 600).unwrap();

    let result = store.record_progress(BookId::new(77), 5);

    assert!(matches!(result, Err(StoreError::NotFound(_))));
    assert!(store.weekly_events().unwrap().is_empty());
}

#[test]
fn test_store_survives_reopen() {
    let (_dir, config, store) = setup();
    let id = store.add_book("Dune", 600).unwrap();
    store.record_progress(id, 42).unwrap();
    drop(store);

    let reopened = SqliteStore::open(config.database_path()).unwrap();
    assert_eq!(reopened.get_book(id).unwrap().unwrap().current_page, 42);
    assert_eq!(reopened.weekly_events().unwrap().len(), 1);
}

#[test]
fn test_legacy_file_alongside_store() {
    let (_dir, config, store) = setup();
    store.add_book("Dune", 600).unwrap();
    store.add_book("Dune", 600).unwrap();

    let mut legacy = LegacyBookManager::open(config.legacy_path()).unwrap();
    assert!(legacy.add_book("Dune", 600).unwrap());
    assert!(!legacy.add_book("Dune", 600).unwrap());

    // Titles repeat in the store but not in the legacy file
    assert_eq!(store.list_books().unwrap().len(), 2);
    let reloaded = LegacyBookManager::open(config.legacy_path()).unwrap();
    assert_eq!(reloaded.books().len(), 1);
}

#[test]
fn test_configured_paths_are_used() {
    let dir = tempfile::tempdir().unwrap();
    let toml = format!(
        r#"
        config_version = 1

        [storage]
        data_dir = "{}"
        database_file = "reading.db"

        [report]
        file_name = "weekly.csv"
        "#,
        dir.path().display()
    );
    let config = parse_config(&toml).unwrap();
    std::fs::create_dir_all(&config.report.export_dir).unwrap();

    let store = SqliteStore::open(config.database_path()).unwrap();
    let summary = ReportGenerator::from_config(&store, &config.report)
        .export_weekly_csv()
        .unwrap();

    assert!(dir.path().join("reading.db").exists());
    assert_eq!(summary.path, dir.path().join("exports").join("weekly.csv"));
}
