//! Concept tab: the stress-test demo
//!
//! One overloaded server vs a balanced pool of three. The left panel is
//! the scenario picture, the right panel the request-rate dial and the
//! derived stats.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use lbacad_core::StressDemo;

use crate::theme::{icons::IconSet, palette, styles};

pub struct ConceptTab<'a> {
    demo: &'a StressDemo,
    icons: IconSet,
}

impl<'a> ConceptTab<'a> {
    pub fn new(demo: &'a StressDemo, icons: IconSet) -> Self {
        Self { demo, icons }
    }

    fn scenario_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from("")];
        let client = format!(" {}  TRAFFIC SOURCE", self.icons.client());
        lines.push(Line::from(Span::styled(client, styles::body_text())));
        lines.push(Line::from(""));

        if self.demo.balanced() {
            lines.push(Line::from(vec![
                Span::styled("      │", styles::muted()),
                Span::styled(
                    format!("  {}  LOAD BALANCER", self.icons.balancer()),
                    styles::accent(),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                "      ├──────┬──────┐",
                styles::muted(),
            )));

            let load = self.demo.per_server_load();
            for i in 1..=3 {
                let badge = Span::styled(" ● ", styles::health_badge(true));
                lines.push(Line::from(vec![
                    Span::styled("      ", styles::muted()),
                    badge,
                    Span::styled(
                        format!("{} SRV-0{}  ", self.icons.server(), i),
                        styles::body_text(),
                    ),
                    Span::styled(
                        format!("{load} req/s"),
                        ratatui::style::Style::default().fg(palette::STATUS_GREEN),
                    ),
                ]));
            }
        } else {
            lines.push(Line::from(Span::styled("      │", styles::muted())));
            let level_color = styles::load_level_color(self.demo.load_level());
            let label = if self.demo.is_stressed() {
                " MAIN SERVER  (overloaded!)"
            } else {
                " MAIN SERVER"
            };
            lines.push(Line::from(vec![
                Span::styled(format!("      {}", self.icons.server()), styles::body_text()),
                Span::styled(label.to_string(), ratatui::style::Style::default().fg(level_color)),
            ]));
        }

        lines
    }

    fn stats_line(&self) -> Line<'static> {
        let status_style = if self.demo.is_stressed() {
            styles::health_badge(false)
        } else {
            styles::health_badge(true)
        };
        let resource = if self.demo.balanced() {
            format!("{}%", self.demo.per_server_load())
        } else {
            format!("{}%", self.demo.rps())
        };

        Line::from(vec![
            Span::styled(" STATUS ", styles::section_label()),
            Span::styled(self.demo.status_label().to_string(), status_style),
            Span::styled("  LATENCY ", styles::section_label()),
            Span::styled(self.demo.latency_label().to_string(), styles::accent()),
            Span::styled("  RESOURCE ", styles::section_label()),
            Span::styled(resource, styles::body_text()),
            Span::styled("  UPTIME ", styles::section_label()),
            Span::styled(self.demo.uptime_label().to_string(), styles::body_text()),
        ])
    }
}

impl Widget for ConceptTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        // Scenario panel
        let scenario_title = if self.demo.balanced() {
            " The Orderly System "
        } else {
            " The Chaotic Scene "
        };
        let scenario = Paragraph::new(self.scenario_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::card_border())
                .title(Span::styled(scenario_title, styles::title())),
        );
        scenario.render(columns[0], buf);

        // Control panel
        let control_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(columns[1]);

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles::card_border())
                    .title(Span::styled(" The Stress Test ", styles::title())),
            )
            .gauge_style(
                ratatui::style::Style::default()
                    .fg(styles::load_level_color(self.demo.load_level())),
            )
            .ratio(f64::from(self.demo.rps()) / 100.0)
            .label(format!("{} RPS", self.demo.rps()));
        gauge.render(control_rows[0], buf);

        let advice = if self.demo.is_stressed() {
            Span::styled(
                " SYSTEM CAPACITY EXCEEDED - press Enter to deploy a load balancer",
                styles::health_badge(false),
            )
        } else if self.demo.balanced() {
            Span::styled(
                " Traffic is evenly distributed. All servers are in the green zone.",
                styles::body_text(),
            )
        } else {
            Span::styled(
                " Traffic is hitting a single server. Raise the rate and watch it strain.",
                styles::body_text(),
            )
        };
        Paragraph::new(Line::from(advice))
            .wrap(ratatui::widgets::Wrap { trim: false })
            .render(control_rows[1], buf);

        Paragraph::new(Line::from(Span::styled(
            " A load balancer is a traffic cop in front of your servers: it routes \
each incoming request to a backend capable of handling it.",
            styles::muted(),
        )))
        .wrap(ratatui::widgets::Wrap { trim: false })
        .render(control_rows[2], buf);

        Paragraph::new(self.stats_line()).render(control_rows[3], buf);
    }
}
