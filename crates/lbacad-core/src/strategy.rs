//! Request-routing selection strategies
//!
//! `select_server` is the simulator's single decision point: given the
//! fixed registry, the active strategy tag, and a [`SelectionContext`], it
//! returns the id of the backend that handles the next simulated request.
//! All inputs are valid by construction (non-empty registry, weights >= 1),
//! so selection cannot fail.

use serde::{Deserialize, Serialize};

use crate::hash::hash_client_ip;
use crate::registry::{Registry, ServerId};

/// Source of uniform random draws for the weighted strategy.
///
/// Injected so tests can substitute a scripted sequence and assert exact
/// weighted-bucket selection for known draws. The production
/// implementation lives in the app layer on top of `rand`.
pub trait RandomSource {
    /// Uniform draw in `[0, upper)`. `upper` is always >= 1 here.
    fn next_in(&mut self, upper: u32) -> u32;
}

/// Enumerated routing algorithm tag. Exactly one is active at a time;
/// switching takes effect on the next simulated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingStrategy {
    #[default]
    RoundRobin,
    WeightedRoundRobin,
    LeastConnections,
    IpHash,
}

impl RoutingStrategy {
    /// All strategies in selector order
    pub const ALL: [RoutingStrategy; 4] = [
        RoutingStrategy::RoundRobin,
        RoutingStrategy::WeightedRoundRobin,
        RoutingStrategy::LeastConnections,
        RoutingStrategy::IpHash,
    ];

    /// Display name shown in the strategy selector
    pub fn name(&self) -> &'static str {
        match self {
            RoutingStrategy::RoundRobin => "Round Robin",
            RoutingStrategy::WeightedRoundRobin => "Weighted Round Robin",
            RoutingStrategy::LeastConnections => "Least Connections",
            RoutingStrategy::IpHash => "IP Hash",
        }
    }

    /// One-line description shown next to the selector
    pub fn description(&self) -> &'static str {
        match self {
            RoutingStrategy::RoundRobin => {
                "Distributes requests sequentially across the list of servers."
            }
            RoutingStrategy::WeightedRoundRobin => {
                "Allows you to assign higher weight to more powerful servers."
            }
            RoutingStrategy::LeastConnections => {
                "Sends traffic to the server with the fewest active sessions."
            }
            RoutingStrategy::IpHash => {
                "Uses the client IP to ensure a user consistently hits the same server."
            }
        }
    }

    pub fn next(&self) -> Self {
        match self {
            RoutingStrategy::RoundRobin => RoutingStrategy::WeightedRoundRobin,
            RoutingStrategy::WeightedRoundRobin => RoutingStrategy::LeastConnections,
            RoutingStrategy::LeastConnections => RoutingStrategy::IpHash,
            RoutingStrategy::IpHash => RoutingStrategy::RoundRobin,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            RoutingStrategy::RoundRobin => RoutingStrategy::IpHash,
            RoutingStrategy::WeightedRoundRobin => RoutingStrategy::RoundRobin,
            RoutingStrategy::LeastConnections => RoutingStrategy::WeightedRoundRobin,
            RoutingStrategy::IpHash => RoutingStrategy::LeastConnections,
        }
    }
}

/// Per-request inputs to `select_server`.
///
/// The round-robin cursor is read here but advanced by the caller after a
/// round-robin decision; it stays in `[0, server_count)`.
pub struct SelectionContext<'a> {
    pub cursor: usize,
    pub client_ip: &'a str,
    pub rng: &'a mut dyn RandomSource,
}

/// Pick the backend for one simulated request.
pub fn select_server(
    registry: &Registry,
    strategy: RoutingStrategy,
    ctx: &mut SelectionContext<'_>,
) -> ServerId {
    let servers = registry.servers();

    match strategy {
        RoutingStrategy::RoundRobin => servers[ctx.cursor % servers.len()].id,

        RoutingStrategy::WeightedRoundRobin => {
            let roll = ctx.rng.next_in(registry.total_weight());
            let mut cumulative = 0;
            for server in servers {
                cumulative += server.weight;
                if roll < cumulative {
                    return server.id;
                }
            }
            // Unreachable: roll < total_weight == final cumulative
            servers[servers.len() - 1].id
        }

        RoutingStrategy::LeastConnections => {
            // Ties break by first occurrence in registry order, so only a
            // strictly smaller count displaces the current pick.
            let mut min_connections = u32::MAX;
            let mut selected = servers[0].id;
            for server in servers {
                if server.simulated_connections < min_connections {
                    min_connections = server.simulated_connections;
                    selected = server.id;
                }
            }
            selected
        }

        RoutingStrategy::IpHash => {
            let bucket = hash_client_ip(ctx.client_ip) as usize % servers.len();
            servers[bucket].id
        }
    }
}

/// Advance a round-robin cursor after a decision, keeping it in
/// `[0, server_count)`.
pub fn advance_cursor(cursor: usize, server_count: usize) -> usize {
    (cursor + 1) % server_count
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted random source replaying a fixed sequence of draws
    struct Scripted {
        draws: Vec<u32>,
        next: usize,
    }

    impl Scripted {
        fn new(draws: Vec<u32>) -> Self {
            Self { draws, next: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn next_in(&mut self, upper: u32) -> u32 {
            let draw = self.draws[self.next % self.draws.len()];
            self.next += 1;
            draw % upper
        }
    }

    fn ctx<'a>(cursor: usize, client_ip: &'a str, rng: &'a mut dyn RandomSource) -> SelectionContext<'a> {
        SelectionContext {
            cursor,
            client_ip,
            rng,
        }
    }

    #[test]
    fn test_round_robin_cycles_in_registry_order() {
        let registry = Registry::standard();
        let mut rng = Scripted::new(vec![0]);
        let mut cursor = 0;
        let mut chosen = Vec::new();

        for _ in 0..4 {
            let id = select_server(
                &registry,
                RoutingStrategy::RoundRobin,
                &mut ctx(cursor, "192.168.1.42", &mut rng),
            );
            cursor = advance_cursor(cursor, registry.len());
            chosen.push(id);
        }

        assert_eq!(chosen, vec!["A", "B", "C", "A"]);
    }

    #[test]
    fn test_round_robin_period_equals_server_count() {
        let registry = Registry::standard();
        let mut rng = Scripted::new(vec![0]);
        let mut cursor = 0;

        for round in 0..3 {
            for expected in ["A", "B", "C"] {
                let id = select_server(
                    &registry,
                    RoutingStrategy::RoundRobin,
                    &mut ctx(cursor, "", &mut rng),
                );
                cursor = advance_cursor(cursor, registry.len());
                assert_eq!(id, expected, "round {round}");
            }
        }
        assert!(cursor < registry.len());
    }

    #[test]
    fn test_weighted_buckets_for_known_draws() {
        // Weights [5,1,1]: draws 0..=4 land in A, 5 in B, 6 in C
        let registry = Registry::standard();
        for (draw, expected) in [(0, "A"), (4, "A"), (5, "B"), (6, "C")] {
            let mut rng = Scripted::new(vec![draw]);
            let id = select_server(
                &registry,
                RoutingStrategy::WeightedRoundRobin,
                &mut ctx(0, "", &mut rng),
            );
            assert_eq!(id, expected, "draw {draw}");
        }
    }

    #[test]
    fn test_least_connections_is_degenerate() {
        // Connection counts never change, so the answer never changes
        let registry = Registry::standard();
        let mut rng = Scripted::new(vec![0]);
        for _ in 0..5 {
            let id = select_server(
                &registry,
                RoutingStrategy::LeastConnections,
                &mut ctx(0, "", &mut rng),
            );
            assert_eq!(id, "A");
        }
    }

    #[test]
    fn test_ip_hash_reference_fixture() {
        // hash("192.168.1.42") = 1734945306, 1734945306 % 3 = 0 -> A
        let registry = Registry::standard();
        let mut rng = Scripted::new(vec![0]);
        let id = select_server(
            &registry,
            RoutingStrategy::IpHash,
            &mut ctx(0, "192.168.1.42", &mut rng),
        );
        assert_eq!(id, "A");
    }

    #[test]
    fn test_ip_hash_is_sticky_per_ip() {
        let registry = Registry::standard();
        let mut rng = Scripted::new(vec![0]);
        let first = select_server(
            &registry,
            RoutingStrategy::IpHash,
            &mut ctx(0, "10.1.2.3", &mut rng),
        );
        for _ in 0..10 {
            let again = select_server(
                &registry,
                RoutingStrategy::IpHash,
                &mut ctx(0, "10.1.2.3", &mut rng),
            );
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_ip_hash_buckets_for_known_inputs() {
        // hash("hello") = 99162322 -> index 1; hash("10.0.0.1") = 511552166 -> index 2
        let registry = Registry::standard();
        let mut rng = Scripted::new(vec![0]);
        assert_eq!(
            select_server(&registry, RoutingStrategy::IpHash, &mut ctx(0, "hello", &mut rng)),
            "B"
        );
        assert_eq!(
            select_server(
                &registry,
                RoutingStrategy::IpHash,
                &mut ctx(0, "10.0.0.1", &mut rng)
            ),
            "C"
        );
    }

    #[test]
    fn test_strategy_cycle_round_trip() {
        let mut strategy = RoutingStrategy::RoundRobin;
        for _ in 0..RoutingStrategy::ALL.len() {
            strategy = strategy.next();
        }
        assert_eq!(strategy, RoutingStrategy::RoundRobin);
        assert_eq!(strategy.prev(), RoutingStrategy::IpHash);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(RoutingStrategy::RoundRobin.name(), "Round Robin");
        assert_eq!(RoutingStrategy::IpHash.name(), "IP Hash");
        for strategy in RoutingStrategy::ALL {
            assert!(!strategy.description().is_empty());
        }
    }
}
