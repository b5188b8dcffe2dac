//! L4 vs L7 tab: the packet inspector

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use lbacad_app::state::InspectorState;
use lbacad_core::{packet_fields, routing_commentary, PacketLayer, RoutePath};

use crate::theme::{icons::IconSet, styles};

pub struct InspectorTab<'a> {
    state: &'a InspectorState,
    icons: IconSet,
}

impl<'a> InspectorTab<'a> {
    pub fn new(state: &'a InspectorState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn mode_line(&self) -> Line<'static> {
        let (l4, l7) = match self.state.layer {
            PacketLayer::L4 => (styles::tab_active(), styles::tab_inactive()),
            PacketLayer::L7 => (styles::tab_inactive(), styles::tab_active()),
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(format!(" {} ", PacketLayer::L4.label()), l4),
            Span::raw(" "),
            Span::styled(format!(" {} ", PacketLayer::L7.label()), l7),
            Span::raw("   "),
            Span::styled(self.state.layer.protocol_badge(), styles::accent()),
        ])
    }

    fn packet_lines(&self) -> Vec<Line<'static>> {
        if !self.state.inspecting {
            return vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("   {}  Incoming Data Block", self.icons.packet()),
                    styles::body_text(),
                )),
                Line::from(Span::styled(
                    "   Press Enter to open the packet",
                    styles::muted(),
                )),
            ];
        }

        let mut lines = vec![Line::from(Span::styled(
            " PACKET_HEADER_DUMP",
            styles::section_label(),
        ))];
        for field in packet_fields(self.state.layer, self.state.path) {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<10}", field.name), styles::muted()),
                Span::styled(field.value, styles::body_text()),
            ]));
        }
        lines
    }

    fn decision_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            " ROUTING DECISION",
            styles::section_label(),
        ))];
        lines.push(Line::from(Span::styled(
            format!(" \"{}\"", routing_commentary(self.state.layer, self.state.path)),
            styles::body_text(),
        )));

        if self.state.layer == PacketLayer::L7 {
            let (images, video) = match self.state.path {
                RoutePath::Images => (styles::tab_active(), styles::tab_inactive()),
                RoutePath::Video => (styles::tab_inactive(), styles::tab_active()),
            };
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw(" "),
                Span::styled(" GET /images ", images),
                Span::raw(" "),
                Span::styled(" GET /video ", video),
            ]));
        }

        lines
    }

    fn comparison_lines(&self) -> Vec<Line<'static>> {
        match self.state.layer {
            PacketLayer::L4 => vec![
                Line::from(Span::styled(" Performance Focused", styles::title())),
                Line::from(""),
                Line::from(Span::styled(" ✓ Ultra Low Latency", styles::body_text())),
                Line::from(Span::styled(
                    "   Doesn't decrypt or inspect payload; ideal for high-volume raw traffic.",
                    styles::muted(),
                )),
                Line::from(Span::styled(" ✓ Static Protocols", styles::body_text())),
                Line::from(Span::styled(
                    "   Best for DB traffic (MySQL, Postgres) and non-HTTP protocols.",
                    styles::muted(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    " Real world: AWS NLB handles millions of requests per second with a static IP.",
                    styles::body_text(),
                )),
            ],
            PacketLayer::L7 => vec![
                Line::from(Span::styled(" Intelligence Focused", styles::title())),
                Line::from(""),
                Line::from(Span::styled(" ✓ Content-Based Routing", styles::body_text())),
                Line::from(Span::styled(
                    "   Routes on URL path, cookie values, or HTTP headers.",
                    styles::muted(),
                )),
                Line::from(Span::styled(" ✓ Modern Web Features", styles::body_text())),
                Line::from(Span::styled(
                    "   TLS termination, session persistence, web application firewalls.",
                    styles::muted(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    " Real world: Nginx, HAProxy, and AWS ALB are classic L7 reverse proxies.",
                    styles::body_text(),
                )),
            ],
        }
    }
}

impl Widget for InspectorTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        Paragraph::new(self.mode_line()).render(rows[0], buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[0]);

        Paragraph::new(self.packet_lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles::card_border())
                    .title(Span::styled(" Packet Inspector ", styles::title())),
            )
            .render(left_rows[0], buf);

        Paragraph::new(self.decision_lines())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles::card_border()),
            )
            .render(left_rows[1], buf);

        Paragraph::new(self.comparison_lines())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles::card_border())
                    .title(Span::styled(" How deep do we look? ", styles::title())),
            )
            .render(columns[1], buf);
    }
}
