//! Health-check heartbeat simulation
//!
//! Three toggleable backends and a once-per-second tick. Each tick picks a
//! uniformly random healthy backend as the target of a decorative traffic
//! packet and increments every healthy backend's heartbeat counter. With
//! no healthy backends the tick does nothing.

use crate::strategy::RandomSource;

/// Milliseconds between heartbeat ticks
pub const HEARTBEAT_INTERVAL_MS: u64 = 1000;

/// Most packets retained from previous ticks; one more may be appended,
/// so at most `PACKET_TAIL + 1` are held at any time.
const PACKET_TAIL: usize = 12;

/// One backend in the health-check pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthServer {
    /// 1-based display number (SRV-01..03)
    pub id: u8,
    pub active: bool,
    /// Count of heartbeats answered while active
    pub heartbeats: u64,
}

/// A decorative in-flight traffic packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthPacket {
    /// Tick sequence number the packet was emitted on
    pub seq: u64,
    /// Target backend id
    pub target: u8,
}

/// The health-check tab's simulation state
#[derive(Debug, Clone)]
pub struct HealthPool {
    servers: Vec<HealthServer>,
    packets: Vec<HealthPacket>,
    ticks: u64,
}

impl HealthPool {
    pub fn new() -> Self {
        Self {
            servers: (1..=3)
                .map(|id| HealthServer {
                    id,
                    active: true,
                    heartbeats: 0,
                })
                .collect(),
            packets: Vec::new(),
            ticks: 0,
        }
    }

    pub fn servers(&self) -> &[HealthServer] {
        &self.servers
    }

    pub fn packets(&self) -> &[HealthPacket] {
        &self.packets
    }

    /// Flip a backend between healthy and crashed. Out-of-range ids are
    /// ignored.
    pub fn toggle(&mut self, id: u8) {
        if let Some(server) = self.servers.iter_mut().find(|s| s.id == id) {
            server.active = !server.active;
        }
    }

    pub fn healthy_count(&self) -> usize {
        self.servers.iter().filter(|s| s.active).count()
    }

    /// One heartbeat cycle: route a packet to a random healthy backend and
    /// count a heartbeat on every healthy backend.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) {
        let healthy: Vec<u8> = self
            .servers
            .iter()
            .filter(|s| s.active)
            .map(|s| s.id)
            .collect();
        if healthy.is_empty() {
            return;
        }

        self.ticks += 1;
        let target = healthy[rng.next_in(healthy.len() as u32) as usize];

        // Keep the last PACKET_TAIL packets, then append the new one
        if self.packets.len() > PACKET_TAIL {
            let drop = self.packets.len() - PACKET_TAIL;
            self.packets.drain(..drop);
        }
        self.packets.push(HealthPacket {
            seq: self.ticks,
            target,
        });

        for server in self.servers.iter_mut().filter(|s| s.active) {
            server.heartbeats += 1;
        }
    }
}

impl Default for HealthPool {
    fn default() -> Self {
        Self::new()
    }
}
