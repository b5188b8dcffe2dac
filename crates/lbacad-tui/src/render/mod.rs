//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use lbacad_app::state::{AppState, ExplainerTab};

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets;

/// Render the complete UI. Pure: reads state, writes the frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill the terminal with the deepest background color
    let bg = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(widgets::MainHeader::new(icons), areas.header);
    frame.render_widget(widgets::TabBar::new(state.active_tab), areas.tabs);

    // Exactly one widget is mounted at a time
    match state.active_tab {
        ExplainerTab::Concept => {
            frame.render_widget(widgets::ConceptTab::new(&state.stress, icons), areas.body)
        }
        ExplainerTab::Journey => {
            frame.render_widget(widgets::JourneyTab::new(&state.journey, icons), areas.body)
        }
        ExplainerTab::Algorithms => frame.render_widget(
            widgets::SimulatorTab::new(&state.simulator, icons),
            areas.body,
        ),
        ExplainerTab::Health => {
            frame.render_widget(widgets::HealthTab::new(&state.health, icons), areas.body)
        }
        ExplainerTab::Layers => frame.render_widget(
            widgets::InspectorTab::new(&state.inspector, icons),
            areas.body,
        ),
        ExplainerTab::Quiz => {
            frame.render_widget(widgets::QuizTab::new(&state.quiz, icons), areas.body)
        }
    }

    frame.render_widget(
        widgets::Footer::new(state.active_tab, state.simulator.editing_ip),
        areas.footer,
    );
}

/// Render into a plain buffer, for tests and headless snapshots
pub struct FullView<'a> {
    pub state: &'a AppState,
}

impl Widget for FullView<'_> {
    fn render(self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        let areas = layout::create(area);
        let icons = IconSet::new(self.state.settings.ui.icons);

        widgets::MainHeader::new(icons).render(areas.header, buf);
        widgets::TabBar::new(self.state.active_tab).render(areas.tabs, buf);
        match self.state.active_tab {
            ExplainerTab::Concept => {
                widgets::ConceptTab::new(&self.state.stress, icons).render(areas.body, buf)
            }
            ExplainerTab::Journey => {
                widgets::JourneyTab::new(&self.state.journey, icons).render(areas.body, buf)
            }
            ExplainerTab::Algorithms => {
                widgets::SimulatorTab::new(&self.state.simulator, icons).render(areas.body, buf)
            }
            ExplainerTab::Health => {
                widgets::HealthTab::new(&self.state.health, icons).render(areas.body, buf)
            }
            ExplainerTab::Layers => {
                widgets::InspectorTab::new(&self.state.inspector, icons).render(areas.body, buf)
            }
            ExplainerTab::Quiz => {
                widgets::QuizTab::new(&self.state.quiz, icons).render(areas.body, buf)
            }
        }
        widgets::Footer::new(self.state.active_tab, self.state.simulator.editing_ip)
            .render(areas.footer, buf);
    }
}
