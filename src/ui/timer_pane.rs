use crate::app::AppState;
use crate::domain::percent_label;
use crate::engine::Scheduler;
use crate::ui::layout::center_row;
use crate::ui::ring::RingGeometry;
use crate::ui::styles::{
    border_style, clock_style, hint_style, mode_accent, ring_track_color, title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

/// Render the progress ring with the clock in its centre
pub fn render_timer_pane<S: Scheduler>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let mode = app.current_mode();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(format!(" {} ", mode.name()), title_style(mode)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Braille cells are 2 dots wide and 4 dots tall
    let width = f64::from(inner.width) * 2.0;
    let height = f64::from(inner.height) * 4.0;
    let ring = RingGeometry::fit(width, height);
    let track = ring.track_points();
    let arc = ring.arc_points(app.percent);
    let accent = mode_accent(mode);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &track,
                color: ring_track_color(),
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &arc,
                color: accent,
            });
        });
    f.render_widget(canvas, inner);

    let clock = Paragraph::new(Span::styled(app.display.clone(), clock_style(mode)))
        .alignment(Alignment::Center);
    f.render_widget(clock, center_row(inner, 0));

    let percent = Paragraph::new(Span::styled(percent_label(app.percent), hint_style()))
        .alignment(Alignment::Center);
    f.render_widget(percent, center_row(inner, 1));
}
