//! Random-source implementations behind the core's injection seam

use lbacad_core::RandomSource;
use rand::Rng;

/// Production randomness from the thread-local generator
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in(&mut self, upper: u32) -> u32 {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Deterministic source replaying a fixed sequence of draws, for tests.
/// Each draw is reduced modulo the requested upper bound; the sequence
/// repeats when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    draws: Vec<u32>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        Self {
            draws: draws.into(),
            next: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_in(&mut self, upper: u32) -> u32 {
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw % upper
    }
}
