//! Default paths for bookkeeper
//!
//! Paths are user-writable by default:
//! - Config: `$XDG_CONFIG_HOME/bookkeeper/config.toml` or `~/.config/bookkeeper/config.toml`
//! - Data: `$BOOKKEEPER_DATA_DIR`, `$XDG_DATA_HOME/bookkeeper` or `~/.local/share/bookkeeper`
//! - Exports: `<data dir>/exports`

use std::path::{Path, PathBuf};

/// Environment variable for overriding the data directory
pub const BOOKKEEPER_DATA_DIR_ENV: &str = "BOOKKEEPER_DATA_DIR";

/// Application subdirectory name
const APP_DIR: &str = "bookkeeper";

/// Config filename within the config directory
const CONFIG_FILENAME: &str = "config.toml";

/// SQLite database filename within the data directory
pub const DEFAULT_DATABASE_FILE: &str = "books.db";

/// Legacy JSON filename within the data directory
pub const DEFAULT_LEGACY_FILE: &str = "storage.json";

/// Export subdirectory within the data directory
pub const DEFAULT_EXPORT_SUBDIR: &str = "exports";

/// Weekly report filename within the export directory
pub const DEFAULT_EXPORT_FILE: &str = "stats.csv";

/// Get the default config file path.
pub fn default_config_path() -> PathBuf {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join(CONFIG_FILENAME);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILENAME);
    }

    PathBuf::from(CONFIG_FILENAME)
}

/// Get the default data directory.
///
/// Order of precedence:
/// 1. `$BOOKKEEPER_DATA_DIR` environment variable (if set)
/// 2. `$XDG_DATA_HOME/bookkeeper` (if XDG_DATA_HOME is set)
/// 3. `~/.local/share/bookkeeper` (fallback)
pub fn default_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var(BOOKKEEPER_DATA_DIR_ENV) {
        return PathBuf::from(path);
    }

    data_dir_without_env()
}

/// XDG and home-directory fallbacks for the data directory
fn data_dir_without_env() -> PathBuf {
    if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(data_home).join(APP_DIR);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(APP_DIR);
    }

    // Last resort: the working directory
    PathBuf::from(".")
}

/// Default export directory for a given data directory
pub fn export_dir_for(data_dir: &Path) -> PathBuf {
    data_dir.join(DEFAULT_EXPORT_SUBDIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_ends_with_config_toml() {
        let path = default_config_path();
        assert!(path.ends_with(CONFIG_FILENAME));
    }

    #[test]
    fn fallback_data_dir_is_app_dir_or_cwd() {
        let path = data_dir_without_env();
        assert!(path.ends_with(APP_DIR) || path == PathBuf::from("."));
    }

    #[test]
    fn export_dir_is_under_data_dir() {
        let data = PathBuf::from("/var/lib/bookkeeper");
        assert_eq!(
            export_dir_for(&data),
            PathBuf::from("/var/lib/bookkeeper/exports")
        );
    }

    #[test]
    fn default_file_names() {
        assert_eq!(DEFAULT_DATABASE_FILE, "books.db");
        assert_eq!(DEFAULT_LEGACY_FILE, "storage.json");
        assert_eq!(DEFAULT_EXPORT_FILE, "stats.csv");
    }
}
