//! Configuration loading for LB Academy
//!
//! Settings are optional: a missing or unreadable config file falls back
//! to defaults with a logged warning, never an error surfaced to the UI.

mod settings;
mod types;

pub use settings::{config_file_path, load_from, load_settings};
pub use types::{HealthSettings, Settings, SimulatorSettings, UiSettings};
