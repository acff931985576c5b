use crate::app::AppState;
use crate::engine::Scheduler;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the session-finished alarm
pub fn render_alarm_modal<S: Scheduler>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    if let Some(alarm) = &app.alarm {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(format!("  {}", alarm.message), title_style(alarm.mode))),
            Line::raw(""),
            Line::raw(format!("  Finished at {}", alarm.finished_at.format("%H:%M"))),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  [any key]", modal_title_style()),
                Span::raw(" Dismiss"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" ⏰ Time's up ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
