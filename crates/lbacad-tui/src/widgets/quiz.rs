//! Quiz tab: knowledge check with scoring

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use lbacad_app::state::QuizTabState;
use lbacad_core::QuizPhase;

use crate::theme::{palette, styles};
use crate::theme::icons::IconSet;

pub struct QuizTab<'a> {
    quiz: &'a QuizTabState,
    icons: IconSet,
}

impl<'a> QuizTab<'a> {
    pub fn new(quiz: &'a QuizTabState, icons: IconSet) -> Self {
        Self { quiz, icons }
    }

    fn question_lines(&self) -> Vec<Line<'static>> {
        let engine = &self.quiz.engine;
        let question = engine.current_question();
        let revealed = engine.phase() == QuizPhase::Revealed;

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(
                        " QUESTION {} OF {}",
                        engine.current_index() + 1,
                        engine.question_count()
                    ),
                    styles::accent(),
                ),
                Span::styled(format!("   SCORE: {}", engine.score()), styles::muted()),
            ]),
            Line::from(""),
            Line::from(Span::styled(format!(" {}", question.text), styles::title())),
            Line::from(""),
        ];

        for (i, option) in question.options.iter().enumerate() {
            let marker;
            let style;
            if revealed {
                if i == question.answer_index {
                    marker = " ✓ ";
                    style = styles::health_badge(true);
                } else if Some(i) == engine.selected() {
                    marker = " ✗ ";
                    style = styles::health_badge(false);
                } else {
                    marker = "   ";
                    style = styles::muted();
                }
            } else if i == self.quiz.highlighted {
                marker = " > ";
                style = styles::accent();
            } else {
                marker = "   ";
                style = styles::body_text();
            }
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled((*option).to_string(), style),
            ]));
        }

        if revealed {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(" EXPLANATION", styles::section_label())));
            lines.push(Line::from(Span::styled(
                format!(" {}", question.explanation),
                styles::body_text(),
            )));
            lines.push(Line::from(""));
            let prompt = if engine.current_index() + 1 == engine.question_count() {
                " Enter: finish quiz"
            } else {
                " Enter: next question"
            };
            lines.push(Line::from(Span::styled(prompt, styles::muted())));
        }

        lines
    }

    fn result_lines(&self) -> Vec<Line<'static>> {
        let engine = &self.quiz.engine;
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("   {} Quiz Complete!", self.icons.graduate()),
                styles::title(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("   You scored ", styles::body_text()),
                Span::styled(
                    format!("{} out of {}", engine.score(), engine.question_count()),
                    styles::accent(),
                ),
                Span::styled(".", styles::body_text()),
            ]),
            Line::from(""),
            Line::from(Span::styled("   NEXT STEPS", styles::section_label())),
            Line::from(Span::styled(
                "   ✓ Explore Nginx or HAProxy configuration basics.",
                styles::body_text(),
            )),
            Line::from(Span::styled(
                "   ✓ Learn about Global Server Load Balancing (GSLB).",
                styles::body_text(),
            )),
            Line::from(Span::styled(
                "   ✓ Study the \"Thundering Herd\" problem in distributed systems.",
                styles::body_text(),
            )),
            Line::from(""),
            Line::from(Span::styled("   Enter: try again", styles::muted())),
        ]
    }
}

impl Widget for QuizTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = if self.quiz.engine.phase() == QuizPhase::Finished {
            self.result_lines()
        } else {
            self.question_lines()
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles::card_border())
                    .style(ratatui::style::Style::default().bg(palette::CARD_BG))
                    .title(Span::styled(
                        " Summary & Knowledge Check ",
                        styles::title(),
                    )),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_utils::render_to_string;

    #[test]
    fn test_first_question_renders() {
        let quiz = QuizTabState::default();
        let content = render_to_string(QuizTab::new(&quiz, IconSet::new(false)), 100, 24);
        assert!(content.contains("QUESTION 1 OF 3"));
        assert!(content.contains("SCORE: 0"));
        assert!(content.contains("IP Hash"));
    }

    #[test]
    fn test_highlight_marker_follows_selection() {
        let mut quiz = QuizTabState::default();
        quiz.highlight_down();
        let content = render_to_string(QuizTab::new(&quiz, IconSet::new(false)), 100, 24);
        assert!(content.contains("> Least Connections"));
    }

    #[test]
    fn test_revealed_answer_shows_explanation() {
        let mut quiz = QuizTabState::default();
        quiz.highlight_down();
        quiz.highlight_down();
        quiz.confirm();
        let content = render_to_string(QuizTab::new(&quiz, IconSet::new(false)), 130, 24);
        assert!(content.contains("EXPLANATION"));
        assert!(content.contains("Session Persistence"));
        assert!(content.contains("✓ IP Hash"));
    }

    #[test]
    fn test_finished_quiz_shows_score() {
        let mut quiz = QuizTabState::default();
        for _ in 0..quiz.engine.question_count() {
            quiz.confirm();
            quiz.confirm();
        }
        let content = render_to_string(QuizTab::new(&quiz, IconSet::new(false)), 100, 24);
        assert!(content.contains("Quiz Complete!"));
        assert!(content.contains("out of 3"));
        assert!(content.contains("try again"));
    }
}
