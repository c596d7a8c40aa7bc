//! Tracing setup. The terminal belongs to the TUI, so log lines go to a
//! file in the data directory instead of stderr.

use crate::core::constants::{LOG_FILE_NAME, LOG_FILTER_ENV};
use crate::core::error::Result;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs a global subscriber appending to `<dir>/focus-quest.log`.
///
/// The filter comes from `FOCUS_QUEST_LOG` (e.g. `debug`, `focus_quest=trace`)
/// and defaults to `info`. Returns the log file path.
pub fn init_file_logging(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_file() {
        let dir = std::env::temp_dir().join(format!("focus-quest-logging-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = init_file_logging(&dir).expect("logging should initialize");
        assert!(path.exists());
        assert!(path.ends_with(LOG_FILE_NAME));
        std::fs::remove_dir_all(dir).ok();
    }
}
