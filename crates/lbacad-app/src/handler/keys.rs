//! Key event handlers for the explainer tabs

use lbacad_core::RoutePath;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, ExplainerTab};

/// Convert key events to messages based on the active tab
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // The IP field captures everything while editing
    if state.active_tab == ExplainerTab::Algorithms && state.simulator.editing_ip {
        return handle_key_ip_edit(key);
    }

    // Global keys first
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => {
            return Some(Message::Quit)
        }
        InputKey::Tab => return Some(Message::NextTab),
        InputKey::BackTab => return Some(Message::PrevTab),
        InputKey::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            return ExplainerTab::from_index(index).map(Message::SelectTab);
        }
        _ => {}
    }

    match state.active_tab {
        ExplainerTab::Concept => handle_key_concept(key),
        ExplainerTab::Journey => handle_key_journey(key),
        ExplainerTab::Algorithms => handle_key_algorithms(key),
        ExplainerTab::Health => handle_key_health(key),
        ExplainerTab::Layers => handle_key_layers(key),
        ExplainerTab::Quiz => handle_key_quiz(key),
    }
}

/// Keys while the client-IP field is capturing input
fn handle_key_ip_edit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter => Some(Message::EndIpEdit),
        InputKey::Backspace => Some(Message::IpBackspace),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::IpInput(c)),
        _ => None,
    }
}

fn handle_key_concept(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Right | InputKey::Up => Some(Message::AdjustRps(1)),
        InputKey::Left | InputKey::Down => Some(Message::AdjustRps(-1)),
        InputKey::PageUp => Some(Message::AdjustRps(10)),
        InputKey::PageDown => Some(Message::AdjustRps(-10)),
        InputKey::Char('d') | InputKey::Enter => Some(Message::DeployBalancer),
        InputKey::Char('x') => Some(Message::DisableBalancer),
        _ => None,
    }
}

fn handle_key_journey(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('n') | InputKey::Enter | InputKey::Right => Some(Message::JourneyNext),
        InputKey::Char('r') => Some(Message::JourneyReset),
        _ => None,
    }
}

fn handle_key_algorithms(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('s') | InputKey::Enter => Some(Message::SendRequest),
        InputKey::Right => Some(Message::StrategyNext),
        InputKey::Left => Some(Message::StrategyPrev),
        InputKey::Char('i') => Some(Message::StartIpEdit),
        InputKey::Char('g') => Some(Message::RandomizeIp),
        _ => None,
    }
}

fn handle_key_health(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::HealthSelectUp),
        InputKey::Down => Some(Message::HealthSelectDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleSelectedBackend),
        _ => None,
    }
}

fn handle_key_layers(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('t') => Some(Message::ToggleLayer),
        InputKey::Enter => Some(Message::ToggleInspect),
        InputKey::Left => Some(Message::SelectPath(RoutePath::Images)),
        InputKey::Right => Some(Message::SelectPath(RoutePath::Video)),
        _ => None,
    }
}

fn handle_key_quiz(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::QuizHighlightUp),
        InputKey::Down => Some(Message::QuizHighlightDown),
        InputKey::Enter => Some(Message::QuizConfirm),
        InputKey::Char('r') => Some(Message::QuizRestart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_quit_keys() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
        assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));
        assert_eq!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        );
    }

    #[test]
    fn test_digit_keys_select_tabs() {
        let state = AppState::new();
        assert_eq!(
            handle_key(&state, InputKey::Char('3')),
            Some(Message::SelectTab(ExplainerTab::Algorithms))
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('6')),
            Some(Message::SelectTab(ExplainerTab::Quiz))
        );
        assert_eq!(handle_key(&state, InputKey::Char('7')), None);
    }

    #[test]
    fn test_tab_cycling_keys() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::NextTab));
        assert_eq!(
            handle_key(&state, InputKey::BackTab),
            Some(Message::PrevTab)
        );
    }

    #[test]
    fn test_algorithms_keys() {
        let mut state = AppState::new();
        state.select_tab(ExplainerTab::Algorithms);

        assert_eq!(
            handle_key(&state, InputKey::Enter),
            Some(Message::SendRequest)
        );
        assert_eq!(
            handle_key(&state, InputKey::Right),
            Some(Message::StrategyNext)
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('g')),
            Some(Message::RandomizeIp)
        );
    }

    #[test]
    fn test_ip_edit_mode_captures_chars() {
        let mut state = AppState::new();
        state.select_tab(ExplainerTab::Algorithms);
        state.simulator.editing_ip = true;

        // 'q' types into the field instead of quitting
        assert_eq!(
            handle_key(&state, InputKey::Char('q')),
            Some(Message::IpInput('q'))
        );
        assert_eq!(
            handle_key(&state, InputKey::Backspace),
            Some(Message::IpBackspace)
        );
        assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::EndIpEdit));
        // Ctrl+C still force-quits
        assert_eq!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        );
    }

    #[test]
    fn test_health_keys() {
        let mut state = AppState::new();
        state.select_tab(ExplainerTab::Health);

        assert_eq!(
            handle_key(&state, InputKey::Down),
            Some(Message::HealthSelectDown)
        );
        assert_eq!(
            handle_key(&state, InputKey::Enter),
            Some(Message::ToggleSelectedBackend)
        );
    }

    #[test]
    fn test_layers_keys() {
        let mut state = AppState::new();
        state.select_tab(ExplainerTab::Layers);

        assert_eq!(
            handle_key(&state, InputKey::Char('t')),
            Some(Message::ToggleLayer)
        );
        assert_eq!(
            handle_key(&state, InputKey::Right),
            Some(Message::SelectPath(RoutePath::Video))
        );
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Char('z')), None);
    }
}
