//! Concept-tab stress demo: one server vs a balanced pool
//!
//! A requests-per-second dial and a load-balancer toggle, with derived
//! read-only indicators. No randomness and no timers; everything is a
//! pure function of the two inputs.

/// Lowest selectable request rate
pub const MIN_RPS: u32 = 1;
/// Highest selectable request rate
pub const MAX_RPS: u32 = 100;

/// Rate above which a single unbalanced server is considered stressed
const STRESS_THRESHOLD: u32 = 50;

/// Health banding of a server's load level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadLevel {
    Healthy,
    Elevated,
    Critical,
}

impl LoadLevel {
    fn for_load(load: u32) -> Self {
        if load > 70 {
            LoadLevel::Critical
        } else if load > 40 {
            LoadLevel::Elevated
        } else {
            LoadLevel::Healthy
        }
    }
}

/// The intro tab's interactive state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressDemo {
    rps: u32,
    balanced: bool,
}

impl StressDemo {
    pub fn new() -> Self {
        Self {
            rps: 10,
            balanced: false,
        }
    }

    pub fn rps(&self) -> u32 {
        self.rps
    }

    pub fn balanced(&self) -> bool {
        self.balanced
    }

    pub fn set_rps(&mut self, rps: u32) {
        self.rps = rps.clamp(MIN_RPS, MAX_RPS);
    }

    pub fn adjust_rps(&mut self, delta: i32) {
        let next = self.rps as i64 + delta as i64;
        self.set_rps(next.clamp(MIN_RPS as i64, MAX_RPS as i64) as u32);
    }

    pub fn deploy_balancer(&mut self) {
        self.balanced = true;
    }

    pub fn disable_balancer(&mut self) {
        self.balanced = false;
    }

    /// Load hitting each server: the full rate when unbalanced, a third
    /// when spread over the three-server pool.
    pub fn per_server_load(&self) -> u32 {
        if self.balanced {
            self.rps / 3
        } else {
            self.rps
        }
    }

    pub fn load_level(&self) -> LoadLevel {
        LoadLevel::for_load(self.per_server_load())
    }

    /// A single unbalanced server past the threshold is in trouble
    pub fn is_stressed(&self) -> bool {
        !self.balanced && self.rps > STRESS_THRESHOLD
    }

    /// Indicative latency figure for the stats row
    pub fn latency_label(&self) -> &'static str {
        if self.balanced {
            "12ms"
        } else if self.rps > STRESS_THRESHOLD {
            "450ms"
        } else {
            "22ms"
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_stressed() {
            "CRITICAL"
        } else {
            "STABLE"
        }
    }

    pub fn uptime_label(&self) -> &'static str {
        if self.is_stressed() {
            "DROPPING"
        } else {
            "99.99%"
        }
    }
}

impl Default for StressDemo {
    fn default() -> Self {
        Self::new()
    }
}
