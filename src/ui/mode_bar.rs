use crate::app::AppState;
use crate::domain::Mode;
use crate::engine::Scheduler;
use crate::ui::layout::split_mode_bar;
use crate::ui::styles::{border_style, mode_accent, mode_button_style};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the three mode buttons, highlighting the active one
pub fn render_mode_bar<S: Scheduler>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let current = app.current_mode();
    let slots = split_mode_bar(area, Mode::all().len());

    for (mode, slot) in Mode::all().iter().zip(slots) {
        let active = *mode == current;
        let border = if active {
            Style::default().fg(mode_accent(*mode))
        } else {
            border_style()
        };

        let button = Paragraph::new(format!("[{}] {}", mode.key(), mode.name()))
            .style(mode_button_style(*mode, active))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        f.render_widget(button, slot);
    }
}
