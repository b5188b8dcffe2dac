//! Footer key hints, contextual to the active tab

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use lbacad_app::state::ExplainerTab;

use crate::theme::styles;
use crate::widgets::fit_label;

/// One-line footer listing the keys that do something right now
pub struct Footer {
    tab: ExplainerTab,
    editing_ip: bool,
}

impl Footer {
    pub fn new(tab: ExplainerTab, editing_ip: bool) -> Self {
        Self { tab, editing_ip }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.editing_ip {
            return vec![
                ("type", "edit ip"),
                ("Bksp", "delete"),
                ("Enter/Esc", "done"),
            ];
        }

        let mut hints: Vec<(&'static str, &'static str)> = match self.tab {
            ExplainerTab::Concept => vec![
                ("←→", "adjust rps"),
                ("PgUp/PgDn", "±10"),
                ("Enter", "deploy LB"),
                ("x", "disable LB"),
            ],
            ExplainerTab::Journey => vec![("Enter", "next step"), ("r", "reset")],
            ExplainerTab::Algorithms => vec![
                ("Enter", "send request"),
                ("←→", "strategy"),
                ("i", "edit ip"),
                ("g", "random ip"),
            ],
            ExplainerTab::Health => vec![("↑↓", "select"), ("Enter", "crash/restart")],
            ExplainerTab::Layers => vec![
                ("t", "L4/L7"),
                ("Enter", "open packet"),
                ("←→", "route path"),
            ],
            ExplainerTab::Quiz => vec![("↑↓", "option"), ("Enter", "confirm"), ("r", "restart")],
        };

        hints.push(("Tab", "next tab"));
        hints.push(("q", "quit"));
        hints
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::muted()));
            }
            spans.push(Span::styled(*key, styles::key_hint()));
            spans.push(Span::styled(format!(" {action}"), styles::muted()));
        }

        let line = Line::from(spans);
        // Drop to a truncated plain string when the terminal is narrow
        if line.width() > area.width as usize {
            let flat: String = self
                .hints()
                .iter()
                .map(|(k, a)| format!("{k} {a}"))
                .collect::<Vec<_>>()
                .join(" │ ");
            let fitted = fit_label(&flat, area.width.saturating_sub(1) as usize);
            Paragraph::new(Span::styled(format!(" {fitted}"), styles::muted())).render(area, buf);
        } else {
            Paragraph::new(line).render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_utils::render_to_string;

    #[test]
    fn test_footer_always_offers_quit() {
        for tab in ExplainerTab::ALL {
            let content = render_to_string(Footer::new(tab, false), 120, 1);
            assert!(content.contains("quit"), "{} missing quit", tab.label());
        }
    }

    #[test]
    fn test_footer_is_contextual() {
        let content = render_to_string(Footer::new(ExplainerTab::Algorithms, false), 120, 1);
        assert!(content.contains("send request"));

        let content = render_to_string(Footer::new(ExplainerTab::Quiz, false), 120, 1);
        assert!(content.contains("confirm"));
    }

    #[test]
    fn test_footer_ip_editing_mode() {
        let content = render_to_string(Footer::new(ExplainerTab::Algorithms, true), 120, 1);
        assert!(content.contains("edit ip"));
        assert!(!content.contains("quit"));
    }

    #[test]
    fn test_footer_narrow_terminal() {
        // Must not panic, just truncate
        let content = render_to_string(Footer::new(ExplainerTab::Concept, false), 20, 1);
        assert!(!content.is_empty());
    }
}
