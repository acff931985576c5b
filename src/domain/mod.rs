pub mod display;
pub mod enums;
pub mod error;

pub use display::{format_clock, percent_label, progress_percent};
pub use enums::{Mode, RunState};
pub use error::TimerError;
