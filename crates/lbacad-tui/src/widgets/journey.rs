//! Journey tab: the four-step request walkthrough

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use lbacad_core::{journey_steps, JourneyCursor};

use crate::theme::{icons::IconSet, styles};

pub struct JourneyTab<'a> {
    cursor: &'a JourneyCursor,
    icons: IconSet,
}

impl<'a> JourneyTab<'a> {
    pub fn new(cursor: &'a JourneyCursor, icons: IconSet) -> Self {
        Self { cursor, icons }
    }

    /// The client → balancer → backend picture with the active hop lit up
    fn diagram(&self) -> Vec<Line<'static>> {
        let step = self.cursor.step_index();
        let hop = |active: bool| {
            if active {
                styles::accent()
            } else {
                styles::muted()
            }
        };

        vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("  {} CLIENT  ", self.icons.client()), hop(step == 0)),
                Span::styled("──────>  ", hop(step == 1)),
                Span::styled(
                    format!("{} LOAD BALANCER  ", self.icons.balancer()),
                    hop(step == 1),
                ),
                Span::styled("──────>  ", hop(step == 2)),
                Span::styled(format!("{} BACKEND", self.icons.server()), hop(step == 2)),
            ]),
            Line::from(vec![
                Span::styled("  <", hop(step == 3)),
                Span::styled(
                    "────────────── response ──────────────",
                    hop(step == 3),
                ),
            ]),
        ]
    }
}

impl Widget for JourneyTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        Paragraph::new(self.diagram())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles::card_border())
                    .title(Span::styled(" The Request Journey ", styles::title())),
            )
            .render(rows[0], buf);

        let step = self.cursor.current();
        let progress = format!(
            "STEP {} OF {}",
            self.cursor.step_index() + 1,
            journey_steps().len()
        );

        let prompt = if self.cursor.is_last() {
            " Enter: start over"
        } else {
            " Enter: next step"
        };
        let card = vec![
            Line::from(vec![
                Span::styled(step.title, styles::title()),
                Span::raw("   "),
                Span::styled(progress, styles::accent()),
            ]),
            Line::from(""),
            Line::from(Span::styled(step.summary, styles::body_text())),
            Line::from(""),
            Line::from(Span::styled(step.detail, styles::muted())),
            Line::from(""),
            Line::from(Span::styled(prompt, styles::muted())),
        ];

        Paragraph::new(card)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles::card_border_active()),
            )
            .render(rows[1], buf);
    }
}
