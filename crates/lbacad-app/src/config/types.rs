//! Settings type definitions with defaults

use lbacad_core::{RoutingStrategy, HEARTBEAT_INTERVAL_MS};
use serde::Deserialize;

/// User-tunable settings, read from `config.toml`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub simulator: SimulatorSettings,
    pub health: HealthSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Render emoji icons in headers and widgets
    pub icons: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { icons: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulatorSettings {
    /// Strategy active when the Algorithms tab mounts
    pub default_strategy: RoutingStrategy,
    /// Initial content of the client-IP field
    pub default_client_ip: String,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            default_strategy: RoutingStrategy::RoundRobin,
            default_client_ip: "192.168.1.42".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HealthSettings {
    /// Milliseconds between heartbeat ticks on the Health Checks tab
    pub heartbeat_interval_ms: u64,
}

impl Default for HealthSettings {
    fn default() -> Self {
        Self {
            heartbeat_interval_ms: HEARTBEAT_INTERVAL_MS,
        }
    }
}
