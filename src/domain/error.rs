use thiserror::Error;

/// Errors raised at the boundary before a value reaches the timer engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    /// Mode text outside the fixed focus/short/long enumeration
    #[error("invalid mode '{0}' (expected one of: focus, short, long)")]
    InvalidMode(String),
}
