//! Bounded, newest-first log of routing decisions
//!
//! Backs the "traffic logs" column of the simulator tab and the
//! "receiving" highlight on the most recently chosen backend.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::registry::ServerId;

/// Maximum number of retained decisions
pub const HISTORY_CAP: usize = 10;

/// One simulated request's outcome. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    /// Monotonic per-session sequence number
    pub id: u64,
    pub chosen_server: ServerId,
    pub client_ip: String,
    /// Wall-clock time of the simulated request, for the log display
    pub at: DateTime<Local>,
}

/// Ordered sequence of decisions, newest first, capped at
/// [`HISTORY_CAP`] entries. The oldest entry is evicted on overflow.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: VecDeque<RoutingDecision>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a decision, evicting the oldest entry past the cap
    pub fn record(&mut self, decision: RoutingDecision) {
        self.entries.push_front(decision);
        self.entries.truncate(HISTORY_CAP);
    }

    /// Server id of the most recent decision, if any. Drives the
    /// view-layer highlight.
    pub fn currently_active_server(&self) -> Option<ServerId> {
        self.entries.front().map(|d| d.chosen_server)
    }

    /// Newest-first iteration
    pub fn iter(&self) -> impl Iterator<Item = &RoutingDecision> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(id: u64, server: ServerId) -> RoutingDecision {
        RoutingDecision {
            id,
            chosen_server: server,
            client_ip: "192.168.1.42".to_string(),
            at: Local::now(),
        }
    }

    #[test]
    fn test_empty_log_has_no_active_server() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.currently_active_server(), None);
    }

    #[test]
    fn test_record_prepends() {
        let mut log = HistoryLog::new();
        log.record(decision(1, "A"));
        log.record(decision(2, "B"));

        assert_eq!(log.currently_active_server(), Some("B"));
        let ids: Vec<u64> = log.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = HistoryLog::new();
        for id in 1..=15 {
            log.record(decision(id, "A"));
        }

        assert_eq!(log.len(), HISTORY_CAP);
        let ids: Vec<u64> = log.iter().map(|d| d.id).collect();
        // Exactly the 10 most recent remain, newest first
        assert_eq!(ids, (6..=15).rev().collect::<Vec<u64>>());
    }

    #[test]
    fn test_len_never_exceeds_cap() {
        let mut log = HistoryLog::new();
        for id in 0..100 {
            log.record(decision(id, "C"));
            assert!(log.len() <= HISTORY_CAP);
        }
    }
}
