use crate::config::Settings;
use crate::domain::{Mode, RunState};
use crate::engine::{IntervalScheduler, Scheduler, TimerEngine, TimerEvent};
use crate::notifications;
use chrono::{DateTime, Local};
use tracing::warn;

/// Alarm modal state, set when a session runs out
#[derive(Debug, Clone)]
pub struct AlarmState {
    pub mode: Mode,
    pub message: String,
    pub finished_at: DateTime<Local>,
}

/// Terminal window title for a given clock display
pub fn window_title(display: &str) -> String {
    format!("{} - Pomodoro", display)
}

/// Main application state
///
/// Owns the single timer engine and mirrors what the view needs from its
/// events: clock text, ring percentage, start/pause label and the alarm.
pub struct AppState<S: Scheduler = IntervalScheduler> {
    pub engine: TimerEngine<S>,
    pub settings: Settings,
    pub display: String,
    pub percent: f64,
    pub run_state: RunState,
    pub alarm: Option<AlarmState>,
    pending_title: Option<String>,
}

impl<S: Scheduler> AppState<S> {
    pub fn new(engine: TimerEngine<S>, settings: Settings) -> Self {
        let display = engine.display_string();
        let percent = engine.progress_percent();
        let run_state = engine.state();
        let pending_title = Some(window_title(&display));

        Self {
            engine,
            settings,
            display,
            percent,
            run_state,
            alarm: None,
            pending_title,
        }
    }

    pub fn current_mode(&self) -> Mode {
        self.engine.current_mode()
    }

    /// Start/pause button
    pub fn toggle(&mut self) {
        self.engine.toggle();
        self.process_events();
    }

    /// Reset button
    pub fn reset(&mut self) {
        self.engine.reset();
        self.process_events();
    }

    /// Mode button
    pub fn switch_mode(&mut self, mode: Mode) {
        self.engine.switch_mode(mode);
        self.process_events();
    }

    /// Apply elapsed scheduler ticks (called once per UI loop iteration)
    pub fn update(&mut self) {
        self.engine.poll();
        self.process_events();
    }

    pub fn dismiss_alarm(&mut self) {
        self.alarm = None;
    }

    /// Take the window title if it changed since the last call
    pub fn take_title(&mut self) -> Option<String> {
        self.pending_title.take()
    }

    fn process_events(&mut self) {
        for event in self.engine.drain_events() {
            match event {
                TimerEvent::Tick { display, percent } => {
                    self.pending_title = Some(window_title(&display));
                    self.display = display;
                    self.percent = percent;
                }
                TimerEvent::RunningChanged(running) => {
                    self.run_state = if running {
                        RunState::Running
                    } else {
                        RunState::Idle
                    };
                }
                TimerEvent::SessionComplete(mode) => self.raise_alarm(mode),
            }
        }
    }

    fn raise_alarm(&mut self, mode: Mode) {
        self.alarm = Some(AlarmState {
            mode,
            message: notifications::session_finished_message(mode),
            finished_at: Local::now(),
        });

        if self.settings.bell {
            if let Err(e) = notifications::ring_bell() {
                warn!(error = %e, "failed to ring terminal bell");
            }
        }
        if self.settings.desktop_notifications {
            notifications::notify_session_complete(mode);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::ManualScheduler;
    use pretty_assertions::assert_eq;

    pub(crate) fn quiet_settings() -> Settings {
        Settings {
            bell: false,
            desktop_notifications: false,
            ..Settings::default()
        }
    }

    pub(crate) fn create_test_app() -> AppState<ManualScheduler> {
        AppState::new(TimerEngine::new(ManualScheduler::new()), quiet_settings())
    }

    fn run_for(app: &mut AppState<ManualScheduler>, secs: u64) {
        app.engine.scheduler_mut().advance_secs(secs);
        app.update();
    }

    #[test]
    fn test_app_state_new() {
        let mut app = create_test_app();
        assert_eq!(app.display, "25:00");
        assert_eq!(app.percent, 100.0);
        assert_eq!(app.run_state, RunState::Idle);
        assert!(app.alarm.is_none());
        assert_eq!(app.take_title(), Some("25:00 - Pomodoro".to_string()));
        assert_eq!(app.take_title(), None);
    }

    #[test]
    fn test_toggle_updates_run_state() {
        let mut app = create_test_app();
        app.toggle();
        assert_eq!(app.run_state, RunState::Running);

        run_for(&mut app, 1);
        assert_eq!(app.display, "24:59");

        app.toggle();
        assert_eq!(app.run_state, RunState::Idle);
        run_for(&mut app, 5);
        assert_eq!(app.display, "24:59");
    }

    #[test]
    fn test_tick_updates_title() {
        let mut app = create_test_app();
        app.take_title();
        app.toggle();
        run_for(&mut app, 61);
        assert_eq!(app.take_title(), Some("23:59 - Pomodoro".to_string()));
    }

    #[test]
    fn test_switch_mode_rebases_view() {
        let mut app = create_test_app();
        app.toggle();
        run_for(&mut app, 30);

        app.switch_mode(Mode::Short);
        assert_eq!(app.current_mode(), Mode::Short);
        assert_eq!(app.display, "05:00");
        assert_eq!(app.percent, 100.0);
        assert_eq!(app.run_state, RunState::Idle);
    }

    #[test]
    fn test_reset_restores_full_duration() {
        let mut app = create_test_app();
        app.toggle();
        run_for(&mut app, 1490);
        assert_eq!(app.display, "00:10");

        app.reset();
        assert_eq!(app.display, "25:00");
        assert_eq!(app.run_state, RunState::Idle);
    }

    #[test]
    fn test_session_complete_raises_alarm() {
        let mut app = create_test_app();
        app.switch_mode(Mode::Short);
        app.toggle();
        run_for(&mut app, 300);

        let alarm = app.alarm.clone().unwrap();
        assert_eq!(alarm.mode, Mode::Short);
        assert_eq!(alarm.message, "SHORT session finished!");
        assert_eq!(app.display, "00:00");
        assert_eq!(app.percent, 0.0);
        assert_eq!(app.run_state, RunState::Idle);

        app.dismiss_alarm();
        assert!(app.alarm.is_none());
    }
}
