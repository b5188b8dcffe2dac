//! Algorithms tab: the traffic-distribution simulator
//!
//! Three columns mirroring the original demo: strategy controls and the
//! client-IP field on the left, the backend server group in the middle,
//! the bounded traffic log on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use lbacad_app::state::SimulatorState;
use lbacad_core::RoutingStrategy;

use crate::theme::{icons::IconSet, styles};

pub struct SimulatorTab<'a> {
    sim: &'a SimulatorState,
    icons: IconSet,
}

impl<'a> SimulatorTab<'a> {
    pub fn new(sim: &'a SimulatorState, icons: IconSet) -> Self {
        Self { sim, icons }
    }

    fn controls(&self) -> Vec<Line<'static>> {
        let strategy = self.sim.strategy;
        let mut lines = vec![
            Line::from(Span::styled(" SELECTION LOGIC", styles::section_label())),
            Line::from(vec![
                Span::styled(" ◄ ", styles::muted()),
                Span::styled(strategy.name(), styles::accent()),
                Span::styled(" ► ", styles::muted()),
            ]),
            Line::from(Span::styled(
                format!(" {}", strategy.description()),
                styles::body_text(),
            )),
            Line::from(""),
            Line::from(Span::styled(" SIMULATE CLIENT", styles::section_label())),
        ];

        let ip_style = if self.sim.editing_ip {
            styles::accent()
        } else {
            styles::body_text()
        };
        let caret = if self.sim.editing_ip { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(" ip: ", styles::muted()),
            Span::styled(format!("{}{}", self.sim.client_ip, caret), ip_style),
        ]));

        if strategy == RoutingStrategy::IpHash {
            lines.push(Line::from(Span::styled(
                " Same IP, same server - edit the IP to move the bucket.",
                styles::muted(),
            )));
        }

        lines
    }

    fn server_cards(&self, area: Rect, buf: &mut Buffer) {
        let active = self.sim.history.currently_active_server();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);

        for (server, row) in self.sim.registry.servers().iter().zip(rows.iter()) {
            let is_active = active == Some(server.id);
            let border = if is_active {
                styles::card_border_active()
            } else {
                styles::card_border()
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!(" {} Server {}", self.icons.server(), server.id),
                    styles::title(),
                ),
            ])];
            lines.push(Line::from(Span::styled(
                format!(
                    " WEIGHT: {}   CONNS: {}",
                    server.weight, server.simulated_connections
                ),
                styles::muted(),
            )));
            if is_active {
                lines.push(Line::from(Span::styled(
                    " ● RECEIVING...",
                    styles::accent(),
                )));
            }

            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).border_style(border))
                .render(*row, buf);
        }
    }

    fn traffic_log(&self) -> Vec<Line<'static>> {
        if self.sim.history.is_empty() {
            return vec![
                Line::from(""),
                Line::from(Span::styled(
                    " No requests handled yet.",
                    styles::muted(),
                )),
            ];
        }

        self.sim
            .history
            .iter()
            .map(|decision| {
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", decision.at.format("%H:%M:%S")),
                        styles::muted(),
                    ),
                    Span::styled(decision.client_ip.clone(), styles::body_text()),
                    Span::styled(" → ", styles::muted()),
                    Span::styled(format!("SVR_{}", decision.chosen_server), styles::accent()),
                ])
            })
            .collect()
    }
}

impl Widget for SimulatorTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(32),
                Constraint::Percentage(40),
                Constraint::Percentage(28),
            ])
            .split(area);

        Paragraph::new(self.controls())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles::card_border())
                    .title(Span::styled(" Algorithm Simulator ", styles::title())),
            )
            .render(columns[0], buf);

        let group = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::card_border())
            .title(Span::styled(" Backend Server Group ", styles::title()));
        let group_inner = group.inner(columns[1]);
        group.render(columns[1], buf);
        self.server_cards(group_inner, buf);

        Paragraph::new(self.traffic_log())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles::card_border())
                    .title(Span::styled(" Traffic Logs ", styles::title())),
            )
            .render(columns[2], buf);
    }
}
