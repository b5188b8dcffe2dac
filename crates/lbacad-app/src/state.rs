//! Application state (Model in TEA pattern)
//!
//! A single root holds the active-tab selector and one state record per
//! explainer tab. Tabs own their state exclusively and share nothing;
//! switching tabs discards the outgoing tab's record (remount semantics),
//! so cursors, histories, and heartbeat counts start fresh on return.

use std::str::FromStr;
use std::time::{Duration, Instant};

use lbacad_core::{
    advance_cursor, select_server, Error, HealthPool, HistoryLog, JourneyCursor, PacketLayer,
    QuizEngine, QuizPhase, RandomSource, Registry, RoutePath, RoutingDecision, RoutingStrategy,
    SelectionContext, ServerId, StressDemo,
};

use crate::config::Settings;

/// The six explainer tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplainerTab {
    /// What is a load balancer? (stress-test demo)
    #[default]
    Concept,
    /// The request journey walkthrough
    Journey,
    /// Traffic-distribution simulator
    Algorithms,
    /// Health-check heartbeats
    Health,
    /// L4 vs L7 packet inspector
    Layers,
    /// Knowledge check
    Quiz,
}

impl ExplainerTab {
    pub const ALL: [ExplainerTab; 6] = [
        ExplainerTab::Concept,
        ExplainerTab::Journey,
        ExplainerTab::Algorithms,
        ExplainerTab::Health,
        ExplainerTab::Layers,
        ExplainerTab::Quiz,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExplainerTab::Concept => "Concept",
            ExplainerTab::Journey => "How it Works",
            ExplainerTab::Algorithms => "Algorithms",
            ExplainerTab::Health => "Health Checks",
            ExplainerTab::Layers => "L4 vs L7",
            ExplainerTab::Quiz => "Quiz",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for ExplainerTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "concept" => Ok(ExplainerTab::Concept),
            "journey" => Ok(ExplainerTab::Journey),
            "algorithms" => Ok(ExplainerTab::Algorithms),
            "health" => Ok(ExplainerTab::Health),
            "layers" => Ok(ExplainerTab::Layers),
            "quiz" => Ok(ExplainerTab::Quiz),
            other => Err(Error::unknown_tab(other)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Traffic simulator tab
// ─────────────────────────────────────────────────────────────────────────────

/// State owned by the Algorithms tab: the fixed registry, the active
/// strategy, the round-robin cursor, the client-IP text field, and the
/// bounded decision history.
#[derive(Debug, Clone)]
pub struct SimulatorState {
    pub registry: Registry,
    pub strategy: RoutingStrategy,
    pub history: HistoryLog,
    /// Round-robin position; always in `[0, registry.len())`
    pub cursor: usize,
    pub client_ip: String,
    /// True while the IP field captures keystrokes
    pub editing_ip: bool,
    next_decision_id: u64,
}

impl SimulatorState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            registry: Registry::standard(),
            strategy: settings.simulator.default_strategy,
            history: HistoryLog::new(),
            cursor: 0,
            client_ip: settings.simulator.default_client_ip.clone(),
            editing_ip: false,
            next_decision_id: 0,
        }
    }

    /// Run one simulated request through the active strategy and record
    /// the decision.
    pub fn process_request(&mut self, rng: &mut dyn RandomSource) -> ServerId {
        let mut ctx = SelectionContext {
            cursor: self.cursor,
            client_ip: &self.client_ip,
            rng,
        };
        let chosen = select_server(&self.registry, self.strategy, &mut ctx);

        if self.strategy == RoutingStrategy::RoundRobin {
            self.cursor = advance_cursor(self.cursor, self.registry.len());
        }

        self.next_decision_id += 1;
        self.history.record(RoutingDecision {
            id: self.next_decision_id,
            chosen_server: chosen,
            client_ip: self.client_ip.clone(),
            at: chrono::Local::now(),
        });

        chosen
    }

    /// Replace the client IP with a random `192.168.x.y` address
    pub fn randomize_ip(&mut self, rng: &mut dyn RandomSource) {
        self.client_ip = format!("192.168.{}.{}", rng.next_in(255), rng.next_in(255));
    }

    pub fn push_ip_char(&mut self, c: char) {
        self.client_ip.push(c);
    }

    pub fn backspace_ip(&mut self) {
        self.client_ip.pop();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Health-check tab
// ─────────────────────────────────────────────────────────────────────────────

/// State owned by the Health Checks tab: the toggleable pool, the
/// keyboard-selected row, and the heartbeat timer bookkeeping.
#[derive(Debug, Clone)]
pub struct HealthState {
    pub pool: HealthPool,
    /// Index of the keyboard-selected backend row
    pub selected: usize,
    interval: Duration,
    last_beat: Instant,
}

impl HealthState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pool: HealthPool::new(),
            selected: 0,
            interval: Duration::from_millis(settings.health.heartbeat_interval_ms),
            last_beat: Instant::now(),
        }
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        self.selected = (self.selected + 1).min(self.pool.servers().len() - 1);
    }

    pub fn toggle_selected(&mut self) {
        let id = self.pool.servers()[self.selected].id;
        self.pool.toggle(id);
    }

    /// Run a heartbeat cycle when the interval has elapsed. Called on
    /// every UI tick; cheap no-op in between beats.
    pub fn maybe_beat(&mut self, rng: &mut dyn RandomSource) {
        if self.last_beat.elapsed() >= self.interval {
            self.last_beat = Instant::now();
            self.pool.tick(rng);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Packet inspector tab
// ─────────────────────────────────────────────────────────────────────────────

/// State owned by the L4 vs L7 tab
#[derive(Debug, Clone, Copy, Default)]
pub struct InspectorState {
    pub layer: PacketLayer,
    /// True once the packet has been opened for inspection
    pub inspecting: bool,
    pub path: RoutePath,
}

impl InspectorState {
    pub fn toggle_layer(&mut self) {
        self.layer = self.layer.toggled();
        // Switching layers closes the header dump, like re-receiving a packet
        self.inspecting = false;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quiz tab
// ─────────────────────────────────────────────────────────────────────────────

/// State owned by the Quiz tab: the scoring engine plus the
/// keyboard-highlighted option
#[derive(Debug, Clone, Default)]
pub struct QuizTabState {
    pub engine: QuizEngine,
    pub highlighted: usize,
}

impl QuizTabState {
    pub fn highlight_up(&mut self) {
        if self.engine.phase() == QuizPhase::Answering {
            self.highlighted = self.highlighted.saturating_sub(1);
        }
    }

    pub fn highlight_down(&mut self) {
        if self.engine.phase() == QuizPhase::Answering {
            let max = self.engine.current_question().options.len() - 1;
            self.highlighted = (self.highlighted + 1).min(max);
        }
    }

    /// Enter confirms the highlighted answer, advances past the
    /// explanation, or restarts a finished quiz.
    pub fn confirm(&mut self) {
        match self.engine.phase() {
            QuizPhase::Answering => self.engine.answer(self.highlighted),
            QuizPhase::Revealed => {
                self.engine.next();
                self.highlighted = 0;
            }
            QuizPhase::Finished => self.restart(),
        }
    }

    pub fn restart(&mut self) {
        self.engine.restart();
        self.highlighted = 0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Root state
// ─────────────────────────────────────────────────────────────────────────────

/// Root application state: the active-tab selector plus one record per tab
#[derive(Debug)]
pub struct AppState {
    pub active_tab: ExplainerTab,
    pub settings: Settings,
    should_quit: bool,

    pub stress: StressDemo,
    pub journey: JourneyCursor,
    pub simulator: SimulatorState,
    pub health: HealthState,
    pub inspector: InspectorState,
    pub quiz: QuizTabState,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            active_tab: ExplainerTab::default(),
            stress: StressDemo::new(),
            journey: JourneyCursor::new(),
            simulator: SimulatorState::new(&settings),
            health: HealthState::new(&settings),
            inspector: InspectorState::default(),
            quiz: QuizTabState::default(),
            should_quit: false,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch tabs, discarding the outgoing tab's state (remount
    /// semantics: cursors, histories, and heartbeats reset).
    pub fn select_tab(&mut self, tab: ExplainerTab) {
        if tab == self.active_tab {
            return;
        }
        self.unmount(self.active_tab);
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    fn unmount(&mut self, tab: ExplainerTab) {
        match tab {
            ExplainerTab::Concept => self.stress = StressDemo::new(),
            ExplainerTab::Journey => self.journey = JourneyCursor::new(),
            ExplainerTab::Algorithms => self.simulator = SimulatorState::new(&self.settings),
            ExplainerTab::Health => self.health = HealthState::new(&self.settings),
            ExplainerTab::Layers => self.inspector = InspectorState::default(),
            ExplainerTab::Quiz => self.quiz = QuizTabState::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRandom;

    #[test]
    fn test_tab_order_and_cycling() {
        assert_eq!(ExplainerTab::Concept.next(), ExplainerTab::Journey);
        assert_eq!(ExplainerTab::Quiz.next(), ExplainerTab::Concept);
        assert_eq!(ExplainerTab::Concept.prev(), ExplainerTab::Quiz);
        assert_eq!(ExplainerTab::from_index(2), Some(ExplainerTab::Algorithms));
        assert_eq!(ExplainerTab::from_index(6), None);
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!(
            "algorithms".parse::<ExplainerTab>().unwrap(),
            ExplainerTab::Algorithms
        );
        assert_eq!("QUIZ".parse::<ExplainerTab>().unwrap(), ExplainerTab::Quiz);
        assert!("metrics".parse::<ExplainerTab>().is_err());
    }

    #[test]
    fn test_round_robin_sequence_through_state() {
        let mut sim = SimulatorState::new(&Settings::default());
        let mut rng = SequenceRandom::new([0]);

        let chosen: Vec<_> = (0..4).map(|_| sim.process_request(&mut rng)).collect();
        assert_eq!(chosen, vec!["A", "B", "C", "A"]);
        assert!(sim.cursor < sim.registry.len());
    }

    #[test]
    fn test_process_request_records_history() {
        let mut sim = SimulatorState::new(&Settings::default());
        let mut rng = SequenceRandom::new([0]);

        sim.process_request(&mut rng);
        assert_eq!(sim.history.len(), 1);
        assert_eq!(sim.history.currently_active_server(), Some("A"));

        for _ in 0..20 {
            sim.process_request(&mut rng);
        }
        assert_eq!(sim.history.len(), 10);
    }

    #[test]
    fn test_decision_ids_are_monotonic() {
        let mut sim = SimulatorState::new(&Settings::default());
        let mut rng = SequenceRandom::new([0]);
        for _ in 0..5 {
            sim.process_request(&mut rng);
        }
        let ids: Vec<u64> = sim.history.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_randomize_ip_uses_injected_source() {
        let mut sim = SimulatorState::new(&Settings::default());
        let mut rng = SequenceRandom::new([7, 42]);
        sim.randomize_ip(&mut rng);
        assert_eq!(sim.client_ip, "192.168.7.42");
    }

    #[test]
    fn test_ip_editing_mutations() {
        let mut sim = SimulatorState::new(&Settings::default());
        sim.client_ip.clear();
        sim.push_ip_char('1');
        sim.push_ip_char('0');
        sim.backspace_ip();
        assert_eq!(sim.client_ip, "1");
    }

    #[test]
    fn test_tab_switch_discards_outgoing_state() {
        let mut state = AppState::new();
        state.select_tab(ExplainerTab::Algorithms);

        let mut rng = SequenceRandom::new([0]);
        state.simulator.process_request(&mut rng);
        state.simulator.process_request(&mut rng);
        assert_eq!(state.simulator.cursor, 2);

        // Leaving the tab unmounts it; the cursor and history reset
        state.select_tab(ExplainerTab::Quiz);
        assert_eq!(state.simulator.cursor, 0);
        assert!(state.simulator.history.is_empty());
    }

    #[test]
    fn test_selecting_same_tab_keeps_state() {
        let mut state = AppState::new();
        state.select_tab(ExplainerTab::Algorithms);
        let mut rng = SequenceRandom::new([0]);
        state.simulator.process_request(&mut rng);

        state.select_tab(ExplainerTab::Algorithms);
        assert_eq!(state.simulator.history.len(), 1);
    }

    #[test]
    fn test_health_selection_clamps() {
        let mut health = HealthState::new(&Settings::default());
        health.select_up();
        assert_eq!(health.selected, 0);
        for _ in 0..5 {
            health.select_down();
        }
        assert_eq!(health.selected, 2);
    }

    #[test]
    fn test_health_toggle_selected() {
        let mut health = HealthState::new(&Settings::default());
        health.select_down();
        health.toggle_selected();
        assert!(!health.pool.servers()[1].active);
    }

    #[test]
    fn test_quiz_highlight_confirm_flow() {
        let mut quiz = QuizTabState::default();
        quiz.highlight_down();
        quiz.highlight_down();
        assert_eq!(quiz.highlighted, 2);

        quiz.confirm(); // answer "IP Hash" (correct)
        assert_eq!(quiz.engine.score(), 1);

        // Highlight is frozen while the explanation shows
        quiz.highlight_down();
        assert_eq!(quiz.highlighted, 2);

        quiz.confirm(); // advance
        assert_eq!(quiz.engine.current_index(), 1);
        assert_eq!(quiz.highlighted, 0);
    }

    #[test]
    fn test_quiz_finished_confirm_restarts() {
        let mut quiz = QuizTabState::default();
        for _ in 0..quiz.engine.question_count() {
            quiz.confirm(); // answer highlighted (0)
            quiz.confirm(); // advance
        }
        assert_eq!(quiz.engine.phase(), QuizPhase::Finished);

        quiz.confirm();
        assert_eq!(quiz.engine.phase(), QuizPhase::Answering);
        assert_eq!(quiz.engine.current_index(), 0);
    }
}
