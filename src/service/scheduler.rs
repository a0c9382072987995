//! Spawn scheduler - decides when empty seats attract new customers
//!
//! Each seat carries its own eligibility time, re-drawn every time the seat
//! empties. Delays are independent per seat; no scheduling state is shared.

use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::types::{Millis, SeatIndex};

#[derive(Debug, Clone, Copy)]
struct SpawnRecord {
    next_eligible_at: Millis,
}

/// Per-seat spawn timing
pub struct SpawnScheduler {
    records: Vec<SpawnRecord>,
}

impl SpawnScheduler {
    pub fn new(seat_count: usize) -> Self {
        Self {
            records: vec![SpawnRecord { next_eligible_at: 0 }; seat_count],
        }
    }

    /// Draw a fresh delay for a seat that just emptied
    pub fn rearm(&mut self, seat: SeatIndex, now: Millis, rng: &mut impl Rng, config: &GameConfig) {
        if let Some(record) = self.records.get_mut(seat) {
            let delay = rng.gen_range(config.min_spawn_delay_ms..=config.max_spawn_delay_ms);
            record.next_eligible_at = now + delay;
        }
    }

    /// Re-draw every seat's delay (used at round start)
    pub fn rearm_all(&mut self, now: Millis, rng: &mut impl Rng, config: &GameConfig) {
        for seat in 0..self.records.len() {
            self.rearm(seat, now, rng, config);
        }
    }

    /// Whether a seat's spawn delay has elapsed
    pub fn due(&self, seat: SeatIndex, now: Millis) -> bool {
        self.records
            .get(seat)
            .is_some_and(|record| now >= record.next_eligible_at)
    }
}
