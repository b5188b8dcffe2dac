//! # lbacad-core - Core Domain Types
//!
//! Foundation crate for LB Academy. Provides the simulation models behind
//! every explainer tab, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Traffic simulator (`registry`, `strategy`, `history`, `hash`)
//! - [`Server`], [`Registry`] - the fixed three-server backend pool
//! - [`RoutingStrategy`] - selection algorithm tag (round robin, weighted,
//!   least connections, IP hash)
//! - [`select_server()`] - pick a backend for one simulated request
//! - [`RoutingDecision`], [`HistoryLog`] - bounded newest-first request log
//! - [`hash_client_ip()`] - deterministic polynomial string hash
//!
//! ### Collaborator widgets
//! - [`HealthPool`] (`health`) - toggleable backends with heartbeat ticks
//! - [`QuizEngine`] (`quiz`) - static question bank with scoring
//! - [`PacketLayer`] (`inspector`) - L4 vs L7 packet field views
//! - [`JourneyCursor`] (`walkthrough`) - the four-step request journey
//! - [`StressDemo`] (`stress`) - single-server vs balanced load demo
//!
//! ### Error Handling (`error`)
//! - [`Error`] - custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use lbacad_core::prelude::*;
//! ```

pub mod error;
pub mod hash;
pub mod health;
pub mod history;
pub mod inspector;
pub mod logging;
pub mod quiz;
pub mod registry;
pub mod strategy;
pub mod stress;
pub mod walkthrough;

/// Prelude for common imports used throughout all LB Academy crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use hash::hash_client_ip;
pub use health::{HealthPacket, HealthPool, HealthServer, HEARTBEAT_INTERVAL_MS};
pub use history::{HistoryLog, RoutingDecision, HISTORY_CAP};
pub use inspector::{packet_fields, routing_commentary, PacketLayer, RoutePath};
pub use quiz::{question_bank, QuizEngine, QuizPhase, Question};
pub use registry::{Registry, Server, ServerId};
pub use strategy::{advance_cursor, select_server, RandomSource, RoutingStrategy, SelectionContext};
pub use stress::{LoadLevel, StressDemo, MAX_RPS, MIN_RPS};
pub use walkthrough::{journey_steps, JourneyCursor, JourneyStep};
