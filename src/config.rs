//! Startup configuration.

use std::path::PathBuf;

use is_terminal::IsTerminal;

/// Database file created in the working directory when none is given.
pub const DEFAULT_DB_FILE: &str = "cloud_database.db";

/// Settings fixed at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite file holding the `user_data` table.
    pub db_path: PathBuf,
    /// Colorize status lines on stdout.
    pub color: bool,
    /// Colorize diagnostics on stderr.
    pub log_color: bool,
    /// `tracing-subscriber` filter directive for diagnostics on stderr.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            color: std::io::stdout().is_terminal(),
            log_color: std::io::stderr().is_terminal(),
            log_filter: "warn".to_string(),
        }
    }
}
