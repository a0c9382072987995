//! Round session - countdown, tip target, win/lose evaluation
//!
//! One session lives for the whole process and is restarted in place for
//! each round. Only the level survives between rounds (and, through the
//! level store, between process runs); everything else resets on `start`.

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::types::{elapsed_secs, Millis};
use crate::service::ledger::TipLedger;
use crate::service::slot::OrderOutcome;

/// Where the round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Between rounds; waiting for `start`
    Idle,
    /// Countdown running, customers spawning, deliveries accepted
    Running,
    /// Countdown hit zero; "time's up" transition on screen
    Evaluating,
    /// Scored exactly once; waiting for the player to acknowledge
    ShowingResult,
}

/// Outcome of a scored round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub won: bool,
    pub total_tip: u32,
    pub target_tip: u32,
    /// Level after the decision (incremented on a win)
    pub level: u32,
}

/// Phase transitions reported by `tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The countdown just hit zero; spawning is frozen
    TimeUp,
    /// The round was just scored
    Evaluated(RoundResult),
}

/// The round countdown, tip ledger, and level progression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSession {
    level: u32,
    target_tip: u32,
    ledger: TipLedger,
    remaining_secs: u32,
    phase: RoundPhase,
    round_started_at: Option<Millis>,
    evaluating_since: Option<Millis>,
    last_result: Option<RoundResult>,
}

impl RoundSession {
    /// Create a session at the given level (non-positive levels become 1)
    pub fn new(level: u32) -> Self {
        Self {
            level: level.max(1),
            target_tip: 0,
            ledger: TipLedger::new(),
            remaining_secs: 0,
            phase: RoundPhase::Idle,
            round_started_at: None,
            evaluating_since: None,
            last_result: None,
        }
    }

    /// Begin a round: fix the target, zero the ledger, start the countdown
    pub fn start(&mut self, now: Millis, config: &GameConfig) {
        self.target_tip = config.target_tip_for_level(self.level);
        self.ledger = TipLedger::new();
        self.remaining_secs = config.round_duration_secs;
        self.phase = RoundPhase::Running;
        self.round_started_at = Some(now);
        self.evaluating_since = None;
        self.last_result = None;
    }

    /// Advance the countdown and the post-round transition
    pub fn tick(&mut self, now: Millis, config: &GameConfig) -> Option<SessionEvent> {
        match self.phase {
            RoundPhase::Running => {
                if let Some(started_at) = self.round_started_at {
                    self.remaining_secs = config
                        .round_duration_secs
                        .saturating_sub(elapsed_secs(started_at, now));
                }
                if self.remaining_secs == 0 {
                    self.phase = RoundPhase::Evaluating;
                    self.evaluating_since = Some(now);
                    return Some(SessionEvent::TimeUp);
                }
                None
            }
            RoundPhase::Evaluating => {
                let since = self.evaluating_since?;
                if now.saturating_sub(since) < config.times_up_display_ms {
                    return None;
                }
                // Scored exactly once: a win advances the level, a loss
                // replays it
                let won = self.ledger.total() >= self.target_tip;
                if won {
                    self.level += 1;
                }
                let result = RoundResult {
                    won,
                    total_tip: self.ledger.total(),
                    target_tip: self.target_tip,
                    level: self.level,
                };
                self.last_result = Some(result);
                self.phase = RoundPhase::ShowingResult;
                Some(SessionEvent::Evaluated(result))
            }
            RoundPhase::Idle | RoundPhase::ShowingResult => None,
        }
    }

    /// Funnel one resolved order into the ledger
    pub fn record(&mut self, outcome: OrderOutcome, tip: u32) {
        self.ledger.record(outcome, tip);
    }

    /// Player dismissed the result screen; ready for the next `start`
    pub fn acknowledge_result(&mut self) {
        if self.phase == RoundPhase::ShowingResult {
            self.phase = RoundPhase::Idle;
        }
    }

    /// Drop back to a specific level (e.g. a requested reset)
    ///
    /// Refused while a round is running; returns whether it took effect.
    pub fn set_level(&mut self, level: u32) -> bool {
        if self.phase == RoundPhase::Running {
            return false;
        }
        self.level = level.max(1);
        true
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn target_tip(&self) -> u32 {
        self.target_tip
    }

    pub fn total_tip(&self) -> u32 {
        self.ledger.total()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn ledger(&self) -> &TipLedger {
        &self.ledger
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }
}
