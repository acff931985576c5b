use crate::app::AppState;
use crate::engine::Scheduler;
use crate::ui::styles::{border_style, control_style, hint_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the start/pause and reset controls
pub fn render_controls<S: Scheduler>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let line = Line::from(vec![
        Span::styled("[space] ", hint_style()),
        Span::styled(
            app.run_state.control_label(),
            control_style(app.current_mode(), app.run_state),
        ),
        Span::raw("     "),
        Span::styled("[r] ", hint_style()),
        Span::raw("RESET"),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style()));
    f.render_widget(paragraph, area);
}
