//! lbacad-app - Application state and update logic for LB Academy
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a single [`AppState`] root holding the active tab and each
//! tab's independently-owned state record, a [`Message`] enum covering
//! every user action, and the [`handler::update`] dispatch that applies
//! messages to state. Nothing here touches the terminal; rendering lives
//! in `lbacad-tui`.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod rng;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use rng::{SequenceRandom, ThreadRandom};
pub use state::{AppState, ExplainerTab, HealthState, InspectorState, QuizTabState, SimulatorState};
