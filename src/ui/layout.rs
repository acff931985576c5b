use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub mode_bar_area: Rect,
    pub timer_area: Rect,
    pub controls_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Mode bar: three mode buttons (3 rows)
/// - Timer: progress ring and clock (remaining space)
/// - Controls: start/pause and reset (3 rows)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Mode bar
            Constraint::Min(0),    // Timer
            Constraint::Length(3), // Controls
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        mode_bar_area: chunks[1],
        timer_area: chunks[2],
        controls_area: chunks[3],
    }
}

/// Split the mode bar into equal button slots
pub fn split_mode_bar(area: Rect, count: usize) -> Vec<Rect> {
    let count = count.max(1) as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// A one-row strip `offset` rows below the vertical middle of `area`
pub fn center_row(area: Rect, offset: u16) -> Rect {
    let y = area.y + area.height / 2 + offset;
    if area.height == 0 || y >= area.y + area.height {
        return Rect::new(area.x, area.y, area.width, 0);
    }
    Rect::new(area.x, y, area.width, 1)
}

/// Create centered modal area (for the session-finished alarm)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(9),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
