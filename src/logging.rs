//! File-based logging.
//!
//! The TUI owns stdout on the alternate screen, so log output goes to
//! `pomodoro.log` in the pomodoro directory. Set `POMODORO_LOG` to an
//! `EnvFilter` directive (e.g. `debug`) to change verbosity.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive
pub const LOG_ENV: &str = "POMODORO_LOG";

/// Build the filter from `POMODORO_LOG`, falling back to `info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `log_path`
pub fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    tracing::info!(log_file = %log_path.display(), "pomodoro logging initialized");
    Ok(())
}
