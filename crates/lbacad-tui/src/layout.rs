//! Screen layout: header, tab bar, body, footer

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The four fixed regions of the screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// One-line application header
    pub header: Rect,
    /// One-line tab bar
    pub tabs: Rect,
    /// Everything between tab bar and footer: the mounted widget
    pub body: Rect,
    /// One-line key hints
    pub footer: Rect,
}

/// Split the terminal area into the fixed regions
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenAreas {
        header: rows[0],
        tabs: rows[1],
        body: rows[2],
        footer: rows[3],
    }
}
