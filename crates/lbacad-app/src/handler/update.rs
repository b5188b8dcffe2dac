//! Main update function - handles state transitions (TEA pattern)

use lbacad_core::RandomSource;
use tracing::debug;

use crate::message::Message;
use crate::state::{AppState, ExplainerTab};

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state. Returns an optional follow-up
/// message for the event loop to feed back in.
///
/// The random source is injected so tests can script the weighted
/// strategy and the random-IP generator.
pub fn update(state: &mut AppState, message: Message, rng: &mut dyn RandomSource) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            // The heartbeat timer only runs while its widget is mounted
            if state.active_tab == ExplainerTab::Health {
                state.health.maybe_beat(rng);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tab Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => {
            state.select_tab(tab);
            UpdateResult::none()
        }
        Message::NextTab => {
            state.next_tab();
            UpdateResult::none()
        }
        Message::PrevTab => {
            state.prev_tab();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Concept Tab
        // ─────────────────────────────────────────────────────────
        Message::AdjustRps(delta) => {
            state.stress.adjust_rps(delta);
            UpdateResult::none()
        }
        Message::DeployBalancer => {
            state.stress.deploy_balancer();
            UpdateResult::none()
        }
        Message::DisableBalancer => {
            state.stress.disable_balancer();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Journey Tab
        // ─────────────────────────────────────────────────────────
        Message::JourneyNext => {
            state.journey.next();
            UpdateResult::none()
        }
        Message::JourneyReset => {
            state.journey.reset();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Algorithms Tab
        // ─────────────────────────────────────────────────────────
        Message::SendRequest => {
            let chosen = state.simulator.process_request(rng);
            debug!(
                strategy = state.simulator.strategy.name(),
                client_ip = %state.simulator.client_ip,
                chosen,
                "Routed simulated request"
            );
            UpdateResult::none()
        }
        Message::StrategyNext => {
            state.simulator.strategy = state.simulator.strategy.next();
            UpdateResult::none()
        }
        Message::StrategyPrev => {
            state.simulator.strategy = state.simulator.strategy.prev();
            UpdateResult::none()
        }
        Message::StartIpEdit => {
            state.simulator.editing_ip = true;
            UpdateResult::none()
        }
        Message::EndIpEdit => {
            state.simulator.editing_ip = false;
            UpdateResult::none()
        }
        Message::IpInput(c) => {
            state.simulator.push_ip_char(c);
            UpdateResult::none()
        }
        Message::IpBackspace => {
            state.simulator.backspace_ip();
            UpdateResult::none()
        }
        Message::RandomizeIp => {
            state.simulator.randomize_ip(rng);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Health Checks Tab
        // ─────────────────────────────────────────────────────────
        Message::HealthSelectUp => {
            state.health.select_up();
            UpdateResult::none()
        }
        Message::HealthSelectDown => {
            state.health.select_down();
            UpdateResult::none()
        }
        Message::ToggleSelectedBackend => {
            state.health.toggle_selected();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // L4 vs L7 Tab
        // ─────────────────────────────────────────────────────────
        Message::ToggleLayer => {
            state.inspector.toggle_layer();
            UpdateResult::none()
        }
        Message::ToggleInspect => {
            state.inspector.inspecting = !state.inspector.inspecting;
            UpdateResult::none()
        }
        Message::SelectPath(path) => {
            state.inspector.path = path;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Quiz Tab
        // ─────────────────────────────────────────────────────────
        Message::QuizHighlightUp => {
            state.quiz.highlight_up();
            UpdateResult::none()
        }
        Message::QuizHighlightDown => {
            state.quiz.highlight_down();
            UpdateResult::none()
        }
        Message::QuizConfirm => {
            state.quiz.confirm();
            UpdateResult::none()
        }
        Message::QuizRestart => {
            state.quiz.restart();
            UpdateResult::none()
        }
    }
}
