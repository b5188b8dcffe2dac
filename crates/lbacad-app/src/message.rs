//! Message types for the application (TEA pattern)

use lbacad_core::RoutePath;

use crate::input_key::InputKey;
use crate::state::ExplainerTab;

/// All possible messages/actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (heartbeat timer, animations)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Tab Navigation
    // ─────────────────────────────────────────────────────────
    /// Jump to a specific tab (unmounts the outgoing one)
    SelectTab(ExplainerTab),
    /// Switch to the next tab (Tab)
    NextTab,
    /// Switch to the previous tab (Shift+Tab)
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Concept Tab (stress demo)
    // ─────────────────────────────────────────────────────────
    /// Move the requests-per-second dial by a delta
    AdjustRps(i32),
    /// Put the load balancer in front of the pool
    DeployBalancer,
    /// Remove the load balancer again
    DisableBalancer,

    // ─────────────────────────────────────────────────────────
    // Journey Tab (walkthrough)
    // ─────────────────────────────────────────────────────────
    /// Advance the walkthrough (wraps after the last step)
    JourneyNext,
    /// Return the walkthrough to step one
    JourneyReset,

    // ─────────────────────────────────────────────────────────
    // Algorithms Tab (traffic simulator)
    // ─────────────────────────────────────────────────────────
    /// Run one simulated request through the active strategy
    SendRequest,
    /// Cycle to the next routing strategy
    StrategyNext,
    /// Cycle to the previous routing strategy
    StrategyPrev,
    /// Start capturing keystrokes into the client-IP field
    StartIpEdit,
    /// Stop capturing keystrokes into the client-IP field
    EndIpEdit,
    /// Append a character to the client-IP field
    IpInput(char),
    /// Delete the last character of the client-IP field
    IpBackspace,
    /// Replace the client IP with a random address
    RandomizeIp,

    // ─────────────────────────────────────────────────────────
    // Health Checks Tab
    // ─────────────────────────────────────────────────────────
    /// Move the backend selection up
    HealthSelectUp,
    /// Move the backend selection down
    HealthSelectDown,
    /// Crash or revive the selected backend
    ToggleSelectedBackend,

    // ─────────────────────────────────────────────────────────
    // L4 vs L7 Tab (packet inspector)
    // ─────────────────────────────────────────────────────────
    /// Switch between transport and application layer views
    ToggleLayer,
    /// Open or close the packet header dump
    ToggleInspect,
    /// Choose the route path shown in L7 mode
    SelectPath(RoutePath),

    // ─────────────────────────────────────────────────────────
    // Quiz Tab
    // ─────────────────────────────────────────────────────────
    /// Move the option highlight up
    QuizHighlightUp,
    /// Move the option highlight down
    QuizHighlightDown,
    /// Confirm: lock in the answer, advance, or restart when finished
    QuizConfirm,
    /// Start the quiz over
    QuizRestart,
}
