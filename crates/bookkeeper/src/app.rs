//! Command handlers

use anyhow::{Context, Result as AnyResult};
use bookkeeper_config::{load_config_or_default, Config};
use bookkeeper_report::ReportGenerator;
use bookkeeper_store::{LegacyBookManager, SqliteStore, Store};
use bookkeeper_util::{parse_page, parse_title, parse_total_pages, BookId, BookkeeperError, Result};
use tracing::{debug, info};

use crate::cli::{Args, Commands, LegacyCommands};
use crate::render;

pub struct App {
    config: Config,
    store: SqliteStore,
}

impl App {
    pub fn from_args(args: &Args) -> AnyResult<Self> {
        let mut config = load_config_or_default(&args.config)
            .with_context(|| format!("Failed to load config from {:?}", args.config))?;

        if let Some(data_dir) = &args.data_dir {
            config = config.with_data_dir(data_dir.clone());
        }

        Self::open(config)
    }

    /// Create the data and export directories, then open the store
    pub fn open(config: Config) -> AnyResult<Self> {
        let data_dir = &config.storage.data_dir;
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;

        let export_dir = &config.report.export_dir;
        std::fs::create_dir_all(export_dir)
            .with_context(|| format!("Failed to create export directory {:?}", export_dir))?;

        let db_path = config.database_path();
        let store = SqliteStore::open(&db_path)
            .with_context(|| format!("Failed to open database {:?}", db_path))?;

        if !store.is_healthy() {
            anyhow::bail!("Database {:?} is not responding", db_path);
        }

        info!(db_path = %db_path.display(), "Store initialized");

        Ok(Self { config, store })
    }

    /// Run one command and return the text to show the user
    pub fn run(&self, command: &Commands) -> Result<String> {
        debug!(?command, "Running command");

        match command {
            Commands::Add { title, total_pages } => self.add_book(title, total_pages),
            Commands::List => self.list_books(),
            Commands::Update { book_id, page } => self.update_page(book_id, page),
            Commands::Week => self.window_events(),
            Commands::Export => self.export(),
            Commands::Legacy { command } => self.run_legacy(command),
        }
    }

    fn add_book(&self, title: &str, total_pages: &str) -> Result<String> {
        let title = parse_title(title)?;
        let total_pages = parse_total_pages(total_pages)?;

        let id = self.store.add_book(&title, total_pages)?;
        Ok(format!("'{title}' added successfully! (id {id})"))
    }

    fn list_books(&self) -> Result<String> {
        let books = self.store.list_books()?;
        Ok(render::book_list(&books))
    }

    fn update_page(&self, book_id: &str, page: &str) -> Result<String> {
        let id: BookId = book_id.parse().map_err(|_| {
            BookkeeperError::invalid_input(format!("'{}' is not a valid book id", book_id.trim()))
        })?;
        let page = parse_page(page)?;

        self.store.record_progress(id, page)?;

        let book = self
            .store
            .get_book(id)?
            .ok_or_else(|| BookkeeperError::not_found(format!("book {id}")))?;
        Ok(format!(
            "Progress updated successfully!\n\n{}",
            render::book_card(&book)
        ))
    }

    fn window_events(&self) -> Result<String> {
        let events = self
            .store
            .events_in_window(bookkeeper_util::now(), self.config.report.window_days)?;
        let books = self.store.list_books()?;
        Ok(render::event_list(
            &events,
            &books,
            self.config.report.window_days,
        ))
    }

    fn export(&self) -> Result<String> {
        let summary = ReportGenerator::from_config(&self.store, &self.config.report)
            .export_weekly_csv()?;
        Ok(format!(
            "Statistics exported successfully to {} ({} updates)",
            summary.path.display(),
            summary.rows
        ))
    }

    fn run_legacy(&self, command: &LegacyCommands) -> Result<String> {
        let mut manager = LegacyBookManager::open(self.config.legacy_path())?;

        match command {
            LegacyCommands::List => Ok(render::legacy_list(manager.books())),
            LegacyCommands::Add { title, total_pages } => {
                let title = parse_title(title)?;
                let total_pages = parse_total_pages(total_pages)?;
                if manager.add_book(&title, total_pages)? {
                    Ok(format!("'{title}' added to {}", manager.path().display()))
                } else {
                    Ok(format!("'{title}' is already in {}", manager.path().display()))
                }
            }
            LegacyCommands::Update { title, page } => {
                let page = parse_page(page)?;
                manager.update_page(title.trim(), page)?;
                Ok(format!("'{}' is now at page {page}", title.trim()))
            }
        }
    }
}
