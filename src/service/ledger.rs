//! Tip ledger - accumulates per-order tips into a round total

use serde::{Deserialize, Serialize};

use crate::service::slot::OrderOutcome;

/// Running totals for one round
///
/// The total is the scored value; the per-outcome counters feed the
/// end-of-round report and the headless playtest summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TipLedger {
    total: u32,
    perfect: u32,
    partial: u32,
    wrong: u32,
    timed_out: u32,
}

impl TipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one resolved order
    pub fn record(&mut self, outcome: OrderOutcome, tip: u32) {
        self.total += tip;
        match outcome {
            OrderOutcome::Perfect => self.perfect += 1,
            OrderOutcome::Partial => self.partial += 1,
            OrderOutcome::Wrong => self.wrong += 1,
            OrderOutcome::TimedOut => self.timed_out += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Orders resolved this round, successful or not
    pub fn orders_resolved(&self) -> u32 {
        self.perfect + self.partial + self.wrong + self.timed_out
    }

    pub fn perfect_count(&self) -> u32 {
        self.perfect
    }

    pub fn partial_count(&self) -> u32 {
        self.partial
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong
    }

    pub fn timed_out_count(&self) -> u32 {
        self.timed_out
    }
}
