use crate::domain::{Mode, RunState};
use ratatui::style::{Color, Modifier, Style};

/// Accent colour for a mode (the per-mode theme)
pub fn mode_accent(mode: Mode) -> Color {
    match mode {
        Mode::Focus => Color::LightRed,
        Mode::Short => Color::LightCyan,
        Mode::Long => Color::LightBlue,
    }
}

/// Mode button style, filled when it is the active mode
pub fn mode_button_style(mode: Mode, active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(mode_accent(mode))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Big clock text
pub fn clock_style(mode: Mode) -> Style {
    Style::default()
        .fg(mode_accent(mode))
        .add_modifier(Modifier::BOLD)
}

/// Unfilled part of the progress ring
pub fn ring_track_color() -> Color {
    Color::DarkGray
}

/// Start/pause control label
pub fn control_style(mode: Mode, state: RunState) -> Style {
    match state {
        RunState::Idle => Style::default()
            .fg(mode_accent(mode))
            .add_modifier(Modifier::BOLD),
        RunState::Running => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    }
}

/// Title style for panes
pub fn title_style(mode: Mode) -> Style {
    Style::default()
        .fg(mode_accent(mode))
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_mode_has_its_own_accent() {
        assert_ne!(mode_accent(Mode::Focus), mode_accent(Mode::Short));
        assert_ne!(mode_accent(Mode::Short), mode_accent(Mode::Long));
        assert_ne!(mode_accent(Mode::Focus), mode_accent(Mode::Long));
    }

    #[test]
    fn test_active_button_is_filled() {
        assert_eq!(mode_button_style(Mode::Short, true).bg, Some(Color::LightCyan));
        assert_eq!(mode_button_style(Mode::Short, false).bg, None);
    }
}
