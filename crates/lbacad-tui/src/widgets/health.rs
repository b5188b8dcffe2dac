//! Health Checks tab: heartbeats, crashes, and failover

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use lbacad_app::state::HealthState;

use crate::theme::{icons::IconSet, palette, styles};

pub struct HealthTab<'a> {
    health: &'a HealthState,
    icons: IconSet,
}

impl<'a> HealthTab<'a> {
    pub fn new(health: &'a HealthState, icons: IconSet) -> Self {
        Self { health, icons }
    }

    fn controller_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("   {} ", self.icons.balancer()), styles::accent()),
                Span::styled("CONTROLLER", styles::section_label()),
            ]),
            Line::from(Span::styled("   SYSTEM_ACTIVE", styles::health_badge(true))),
            Line::from(""),
        ];

        // Recent decorative packets, oldest to newest
        let trail: String = self
            .health
            .pool
            .packets()
            .iter()
            .map(|p| format!("→{}", p.target))
            .collect::<Vec<_>>()
            .join(" ");
        if !trail.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("   {} {}", self.icons.packet(), trail),
                styles::muted(),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " If a backend fails its health check it is removed from rotation \
immediately; revived backends rejoin the pool.",
            styles::body_text(),
        )));

        lines
    }

    fn server_cards(&self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);

        for (i, (server, row)) in self
            .health
            .pool
            .servers()
            .iter()
            .zip(rows.iter())
            .enumerate()
        {
            let selected = i == self.health.selected;
            let border = if selected {
                styles::card_border_active()
            } else {
                styles::card_border()
            };

            let dot = Span::styled(" ● ", styles::health_badge(server.active));
            let name = Span::styled(format!("SRV-0{}", server.id), styles::title());
            let beats = if server.active {
                Span::styled(
                    format!("   {} {}", self.icons.heartbeat(), server.heartbeats),
                    ratatui::style::Style::default().fg(palette::HEARTBEAT_PINK),
                )
            } else {
                Span::styled("   OFFLINE", styles::health_badge(false))
            };

            let action = if server.active {
                " Enter: simulate crash"
            } else {
                " Enter: restart server"
            };

            let icon = if server.active {
                self.icons.server()
            } else {
                self.icons.crashed()
            };

            Paragraph::new(vec![
                Line::from(vec![dot, name, beats]),
                Line::from(Span::styled(format!("   {icon}"), styles::body_text())),
                Line::from(Span::styled(action, styles::muted())),
            ])
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .render(*row, buf);
        }
    }
}

impl Widget for HealthTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        Paragraph::new(self.controller_lines())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles::card_border())
                    .title(Span::styled(" Fault Tolerance ", styles::title())),
            )
            .render(columns[0], buf);

        self.server_cards(columns[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_utils::render_to_string;
    use lbacad_app::rng::SequenceRandom;
    use lbacad_app::Settings;

    fn state() -> HealthState {
        HealthState::new(&Settings::default())
    }

    #[test]
    fn test_initial_render_shows_three_servers() {
        let health = state();
        let content = render_to_string(HealthTab::new(&health, IconSet::new(false)), 110, 24);
        assert!(content.contains("Fault Tolerance"));
        assert!(content.contains("SRV-01"));
        assert!(content.contains("SRV-02"));
        assert!(content.contains("SRV-03"));
        assert!(content.contains("simulate crash"));
    }

    #[test]
    fn test_crashed_server_shows_offline() {
        let mut health = state();
        health.pool.toggle(2);
        let content = render_to_string(HealthTab::new(&health, IconSet::new(false)), 110, 24);
        assert!(content.contains("OFFLINE"));
        assert!(content.contains("restart server"));
    }

    #[test]
    fn test_heartbeats_render_after_ticks() {
        let mut health = state();
        let mut rng = SequenceRandom::new([0]);
        health.pool.tick(&mut rng);
        health.pool.tick(&mut rng);

        let content = render_to_string(HealthTab::new(&health, IconSet::new(false)), 110, 24);
        assert!(content.contains("<3 2"));
        // Packet trail shows targets
        assert!(content.contains("→1"));
    }
}
