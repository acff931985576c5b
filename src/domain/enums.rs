use super::error::TimerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Duration profile of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// 25 minutes of focused work
    Focus,
    /// 5 minute break
    Short,
    /// 15 minute break
    Long,
}

impl Mode {
    /// Fixed length of this mode in seconds
    pub fn duration_secs(&self) -> u32 {
        match self {
            Mode::Focus => 25 * 60,
            Mode::Short => 5 * 60,
            Mode::Long => 15 * 60,
        }
    }

    /// Parse a mode from its tag ("focus", "short", "long"), case-insensitive
    pub fn from_tag(tag: &str) -> Result<Self, TimerError> {
        match tag.trim().to_lowercase().as_str() {
            "focus" => Ok(Self::Focus),
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            _ => Err(TimerError::InvalidMode(tag.to_string())),
        }
    }

    /// Convert mode to its tag
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Short => "short",
            Self::Long => "long",
        }
    }

    /// Get the display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::Short => "Short Break",
            Mode::Long => "Long Break",
        }
    }

    /// Key that selects this mode from the mode bar
    pub fn key(&self) -> char {
        match self {
            Mode::Focus => '1',
            Mode::Short => '2',
            Mode::Long => '3',
        }
    }

    /// Map a pressed key to a mode (digit or first letter)
    pub fn from_key(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            '1' | 'f' => Some(Mode::Focus),
            '2' | 's' => Some(Mode::Short),
            '3' | 'l' => Some(Mode::Long),
            _ => None,
        }
    }

    /// Get all modes in mode-bar order
    pub fn all() -> &'static [Mode] {
        &[Mode::Focus, Mode::Short, Mode::Long]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_tag())
    }
}

impl FromStr for Mode {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

/// Whether the countdown is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

impl RunState {
    /// Label for the start/pause control: the action a press would take
    pub fn control_label(&self) -> &'static str {
        match self {
            RunState::Idle => "START",
            RunState::Running => "PAUSE",
        }
    }
}
