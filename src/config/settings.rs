use super::files::{atomic_write, read_file};
use crate::domain::{Mode, TimerError};
use crate::ticker;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mode loaded at startup ("focus", "short" or "long")
    pub start_mode: String,
    /// Ring the terminal bell when a session finishes
    pub bell: bool,
    /// Send a desktop notification when a session finishes
    pub desktop_notifications: bool,
    /// How often the UI wakes up to redraw and poll the timer
    pub poll_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_mode: Mode::Focus.to_tag().to_string(),
            bell: true,
            desktop_notifications: true,
            poll_interval_ms: ticker::DEFAULT_POLL_MS,
        }
    }
}

impl Settings {
    /// Validated start mode
    pub fn start_mode(&self) -> Result<Mode, TimerError> {
        Mode::from_tag(&self.start_mode)
    }

    /// UI poll interval, clamped to a sane range
    pub fn poll_interval(&self) -> Duration {
        ticker::poll_duration(self.poll_interval_ms)
    }
}

/// Load settings from config.json, defaults if the file doesn't exist
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let content = read_file(path)?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings: {}", path.display()))?;
    settings.start_mode()?;
    Ok(settings)
}

/// Save settings to config.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    atomic_write(path, &json)?;
    Ok(())
}
