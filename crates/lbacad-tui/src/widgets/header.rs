//! Application header and tab bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use lbacad_app::state::ExplainerTab;

use crate::theme::{icons::IconSet, styles};

/// One-line application header
pub struct MainHeader {
    icons: IconSet,
}

impl MainHeader {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.balancer(), styles::accent()),
            Span::styled(" LB Academy", styles::title()),
            Span::styled("  load balancing, visualized", styles::muted()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

/// One-line tab selector
pub struct TabBar {
    active: ExplainerTab,
}

impl TabBar {
    pub fn new(active: ExplainerTab) -> Self {
        Self { active }
    }

    fn titles() -> Vec<Line<'static>> {
        ExplainerTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), styles::muted()),
                    Span::raw(format!("{} ", tab.label())),
                ])
            })
            .collect()
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tabs = Tabs::new(Self::titles())
            .select(self.active.index())
            .style(styles::tab_inactive())
            .highlight_style(styles::tab_active())
            .divider("│");

        // Left padding to line up with the header text
        let padded = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        tabs.render(padded, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_utils::render_to_string;

    #[test]
    fn test_header_shows_app_name() {
        let content = render_to_string(MainHeader::new(IconSet::new(false)), 60, 1);
        assert!(content.contains("LB Academy"));
    }

    #[test]
    fn test_tab_bar_lists_all_tabs() {
        let content = render_to_string(TabBar::new(ExplainerTab::Concept), 120, 1);
        for tab in ExplainerTab::ALL {
            assert!(content.contains(tab.label()), "missing {}", tab.label());
        }
    }

    #[test]
    fn test_tab_bar_numbers_tabs() {
        let content = render_to_string(TabBar::new(ExplainerTab::Quiz), 120, 1);
        assert!(content.contains("1 "));
        assert!(content.contains("6 "));
    }
}
