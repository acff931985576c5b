use super::events::TimerEvent;
use super::scheduler::Scheduler;
use crate::domain::{format_clock, progress_percent, Mode, RunState};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Countdown advances by one second per scheduler fire
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Countdown state machine for a single session.
///
/// The engine is `Running` exactly when it holds a scheduler handle, so at
/// most one repeating timer can ever be outstanding. State changes are queued
/// as [`TimerEvent`]s for the view to drain.
#[derive(Debug)]
pub struct TimerEngine<S: Scheduler> {
    mode: Mode,
    time_left: u32,
    interval: Option<S::Handle>,
    scheduler: S,
    events: VecDeque<TimerEvent>,
}

impl<S: Scheduler> TimerEngine<S> {
    /// Create an idle engine in focus mode
    #[cfg(test)]
    pub fn new(scheduler: S) -> Self {
        Self::with_mode(Mode::Focus, scheduler)
    }

    /// Create an idle engine with a full countdown for `mode`
    pub fn with_mode(mode: Mode, scheduler: S) -> Self {
        Self {
            mode,
            time_left: mode.duration_secs(),
            interval: None,
            scheduler,
            events: VecDeque::new(),
        }
    }

    pub fn current_mode(&self) -> Mode {
        self.mode
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn state(&self) -> RunState {
        if self.is_running() {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    /// Remaining time as "MM:SS"
    pub fn display_string(&self) -> String {
        format_clock(self.time_left)
    }

    /// Remaining share of the current mode's duration, in [0, 100]
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.time_left, self.mode.duration_secs())
    }

    /// Begin counting down. No-op while already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.interval = Some(self.scheduler.schedule_repeating(TICK_PERIOD));
        debug!(mode = %self.mode, time_left = self.time_left, "timer started");
        self.events.push_back(TimerEvent::RunningChanged(true));
    }

    /// Stop counting down and cancel the scheduler. No-op while idle.
    pub fn pause(&mut self) {
        if let Some(handle) = self.interval.take() {
            self.scheduler.cancel(handle);
            debug!(mode = %self.mode, time_left = self.time_left, "timer paused");
            self.events.push_back(TimerEvent::RunningChanged(false));
        }
    }

    /// Start when idle, pause when running
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and restore the full duration of the current mode
    pub fn reset(&mut self) {
        self.pause();
        self.time_left = self.mode.duration_secs();
        debug!(mode = %self.mode, "timer reset");
        self.emit_tick();
    }

    /// Stop and load `mode` with its full duration.
    ///
    /// Selecting the mode that is already current still resets it.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.pause();
        self.mode = mode;
        self.time_left = mode.duration_secs();
        info!(mode = %mode, "switched mode");
        self.emit_tick();
    }

    /// Advance the countdown by one second.
    ///
    /// Reaching zero queues `SessionComplete` and returns the engine to idle.
    pub fn tick(&mut self) {
        if !self.is_running() {
            warn!("tick ignored while idle");
            return;
        }

        self.time_left = self.time_left.saturating_sub(1);
        self.emit_tick();

        if self.time_left == 0 {
            info!(mode = %self.mode, "session complete");
            self.events.push_back(TimerEvent::SessionComplete(self.mode));
            self.pause();
        }
    }

    /// Deliver every tick the scheduler fired since the last poll.
    ///
    /// Returns the number of ticks applied. Fires left over after a session
    /// completes are dropped.
    pub fn poll(&mut self) -> u32 {
        let Some(handle) = self.interval else {
            return 0;
        };

        let fired = self.scheduler.take_fired(handle);
        let mut applied = 0;
        for _ in 0..fired {
            if !self.is_running() {
                break;
            }
            self.tick();
            applied += 1;
        }
        applied
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<TimerEvent> {
        self.events.drain(..).collect()
    }

    #[cfg(test)]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn emit_tick(&mut self) {
        self.events.push_back(TimerEvent::Tick {
            display: self.display_string(),
            percent: self.progress_percent(),
        });
    }
}
