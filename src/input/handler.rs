use crate::app::AppState;
use crate::domain::Mode;
use crate::engine::Scheduler;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<S: Scheduler>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    // Ctrl+C always quits, even over the alarm
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.alarm.is_some() {
        app.dismiss_alarm();
        return false;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char(c) => {
            if let Some(mode) = Mode::from_key(c) {
                app.switch_mode(mode);
            }
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::create_test_app;
    use crate::domain::RunState;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))));
        assert!(handle_key(&mut app, key(KeyCode::Esc)));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_handle_toggle() {
        let mut app = create_test_app();
        assert!(!handle_key(&mut app, key(KeyCode::Char(' '))));
        assert_eq!(app.run_state, RunState::Running);

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.run_state, RunState::Idle);
    }

    #[test]
    fn test_handle_mode_keys() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.current_mode(), Mode::Short);

        handle_key(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.current_mode(), Mode::Long);
        assert_eq!(app.display, "15:00");

        handle_key(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.current_mode(), Mode::Focus);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('z')));
        assert_eq!(app.current_mode(), Mode::Focus);
        assert_eq!(app.run_state, RunState::Idle);
    }

    #[test]
    fn test_any_key_dismisses_alarm_first() {
        let mut app = create_test_app();
        app.switch_mode(Mode::Short);
        app.toggle();
        app.engine.scheduler_mut().advance_secs(300);
        app.update();
        assert!(app.alarm.is_some());

        // 'q' only dismisses while the alarm is showing
        assert!(!handle_key(&mut app, key(KeyCode::Char('q'))));
        assert!(app.alarm.is_none());
        assert_eq!(app.run_state, RunState::Idle);

        handle_key(&mut app, key(KeyCode::Char('r')));
        assert_eq!(app.display, "05:00");
    }
}
