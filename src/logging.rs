//! File logging.
//!
//! The TUI owns stdout, so `tracing` output goes to
//! `<cache dir>/confdeck/confdeck.log`. Logging is best effort: when the
//! file cannot be opened the app runs without it.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

pub const LOG_FILE_NAME: &str = "confdeck.log";

/// Default log location, if the platform has a cache directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| log_path_in(&dir))
}

/// Log file path under a given cache root.
pub fn log_path_in(cache_root: &Path) -> PathBuf {
    cache_root.join("confdeck").join(LOG_FILE_NAME)
}

/// Create parent directories and open `path` for appending.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Filter for the configured directive, falling back to `info` when the
/// directive does not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns the log file path on success.
pub fn init_logging(config: &AppConfig) -> Option<PathBuf> {
    let path = default_log_path()?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: could not open log file {}: {}", path.display(), e);
            return None;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    installed.then_some(path)
}
