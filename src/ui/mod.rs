pub mod controls;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod mode_bar;
pub mod ring;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::engine::Scheduler;
use controls::render_controls;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_alarm_modal;
use mode_bar::render_mode_bar;
use ratatui::Frame;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render<S: Scheduler>(f: &mut Frame, app: &AppState<S>) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_mode_bar(f, app, layout.mode_bar_area);
    render_timer_pane(f, app, layout.timer_area);
    render_controls(f, app, layout.controls_area);

    // Alarm modal goes on top of everything
    if app.alarm.is_some() {
        render_alarm_modal(f, app, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::create_test_app;
    use crate::domain::Mode;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_to_string<S: Scheduler>(app: &AppState<S>) -> String {
        let backend = TestBackend::new(60, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_fresh_timer() {
        let app = create_test_app();
        let screen = draw_to_string(&app);

        assert!(screen.contains("25:00"));
        assert!(screen.contains("100%"));
        assert!(screen.contains("START"));
        assert!(screen.contains("[1] Focus"));
        assert!(screen.contains("[2] Short Break"));
        assert!(screen.contains("[3] Long Break"));
    }

    #[test]
    fn test_render_running_short_break() {
        let mut app = create_test_app();
        app.switch_mode(Mode::Short);
        app.toggle();
        app.engine.scheduler_mut().advance_secs(150);
        app.update();

        let screen = draw_to_string(&app);
        assert!(screen.contains("02:30"));
        assert!(screen.contains("50%"));
        assert!(screen.contains("PAUSE"));
    }

    #[test]
    fn test_render_first_second_is_not_full() {
        let mut app = create_test_app();
        app.toggle();
        app.engine.scheduler_mut().advance_secs(1);
        app.update();

        let screen = draw_to_string(&app);
        assert!(screen.contains("24:59"));
        assert!(screen.contains("99%"));
        assert!(!screen.contains("100%"));
    }

    #[test]
    fn test_render_last_second_is_not_empty() {
        let mut app = create_test_app();
        app.toggle();
        app.engine.scheduler_mut().advance_secs(1499);
        app.update();

        let screen = draw_to_string(&app);
        assert!(screen.contains("00:01"));
        assert!(screen.contains("1%"));
        assert!(!screen.contains("0%"));
    }

    #[test]
    fn test_render_alarm() {
        let mut app = create_test_app();
        app.switch_mode(Mode::Short);
        app.toggle();
        app.engine.scheduler_mut().advance_secs(300);
        app.update();

        let screen = draw_to_string(&app);
        assert!(screen.contains("SHORT session finished!"));
        assert!(screen.contains("Dismiss"));
    }
}
