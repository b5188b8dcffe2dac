//! Shared style helpers built on the palette

use lbacad_core::LoadLevel;
use ratatui::style::{Modifier, Style};

use super::palette;

/// Panel title line
pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Section label (small, uppercase copy in the original)
pub fn section_label() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::BOLD)
}

pub fn body_text() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn accent() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// The active tab cell
pub fn tab_active() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::ACCENT_DEEP)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn card_border() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn card_border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

/// Key shortcut in the footer hints
pub fn key_hint() -> Style {
    Style::default()
        .fg(palette::STATUS_YELLOW)
        .add_modifier(Modifier::BOLD)
}

/// Style for a backend's health badge
pub fn health_badge(active: bool) -> Style {
    if active {
        Style::default().fg(palette::STATUS_GREEN)
    } else {
        Style::default().fg(palette::STATUS_RED)
    }
}

/// Gauge/indicator color for a stress-demo load level
pub fn load_level_color(level: LoadLevel) -> ratatui::style::Color {
    match level {
        LoadLevel::Healthy => palette::STATUS_GREEN,
        LoadLevel::Elevated => palette::STATUS_YELLOW,
        LoadLevel::Critical => palette::STATUS_RED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_level_colors_differ() {
        let healthy = load_level_color(LoadLevel::Healthy);
        let critical = load_level_color(LoadLevel::Critical);
        assert_ne!(healthy, critical);
    }

    #[test]
    fn test_health_badge_styles() {
        assert_eq!(health_badge(true).fg, Some(palette::STATUS_GREEN));
        assert_eq!(health_badge(false).fg, Some(palette::STATUS_RED));
    }
}
