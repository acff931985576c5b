pub mod events;
pub mod scheduler;
pub mod timer;

pub use events::TimerEvent;
pub use scheduler::{IntervalScheduler, Scheduler};
pub use timer::TimerEngine;

#[cfg(test)]
pub use scheduler::ManualScheduler;
