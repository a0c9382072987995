//! Game configuration with documented constants
//!
//! All tuning values are collected here with explanations of their purpose
//! and how they interact with each other. Values can be overridden from a
//! TOML file; missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};

/// Configuration for a service round
///
/// These values have been tuned so a competent player can clear the first
/// few levels. Changing them affects pacing and difficulty, not correctness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === SEATING ===
    /// Number of customer seats at the counter
    ///
    /// Each seat is an independent state machine with its own spawn timer.
    pub seat_count: usize,

    // === TIMING ===
    /// Length of one round in seconds
    pub round_duration_secs: u32,

    /// Time a customer waits for a complete order before leaving angry
    ///
    /// At 10 seconds with a 90 second round, a single seat can cycle
    /// through roughly six to eight customers per round.
    pub order_duration_secs: u32,

    /// Minimum delay before an empty seat attracts a new customer (ms)
    pub min_spawn_delay_ms: u64,

    /// Maximum delay before an empty seat attracts a new customer (ms)
    ///
    /// The actual delay is drawn uniformly from [min, max] each time a
    /// seat empties, independently per seat.
    pub max_spawn_delay_ms: u64,

    /// How long a satisfied customer lingers before the seat frees up (ms)
    pub happy_leave_delay_ms: u64,

    /// How long an angry customer lingers before the seat frees up (ms)
    ///
    /// Slightly longer than the happy delay so a failed order blocks the
    /// seat for longer, which is the penalty for mistakes.
    pub angry_leave_delay_ms: u64,

    /// How long the "time's up" transition is shown before the round is
    /// scored (ms)
    pub times_up_display_ms: u64,

    // === SCORING ===
    /// Tip for an order where both items match
    pub tip_perfect: u32,

    /// Tip for an order where exactly one item matches
    ///
    /// A half-right order still resolves as a happy customer; the reduced
    /// tip is the only penalty.
    pub tip_partial: u32,

    /// Tip for an order where neither item matches
    pub tip_wrong: u32,

    // === PROGRESSION ===
    /// Tip target for level 1
    pub base_target_tip: u32,

    /// Additional tip target per level above 1
    ///
    /// target = base + (level - 1) * increment
    pub target_tip_increment: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seat_count: 3,

            round_duration_secs: 90,
            order_duration_secs: 10,
            min_spawn_delay_ms: 1_000,
            max_spawn_delay_ms: 4_000,
            happy_leave_delay_ms: 2_000,
            angry_leave_delay_ms: 3_000,
            times_up_display_ms: 2_000,

            tip_perfect: 20,
            tip_partial: 10,
            tip_wrong: 0,

            base_target_tip: 300,
            target_tip_increment: 50,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Tip target for a given level (1-based)
    pub fn target_tip_for_level(&self, level: u32) -> u32 {
        self.base_target_tip + level.saturating_sub(1) * self.target_tip_increment
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.seat_count == 0 {
            return Err(GameError::Config("seat_count must be at least 1".into()));
        }

        if self.round_duration_secs == 0 || self.order_duration_secs == 0 {
            return Err(GameError::Config("durations must be positive".into()));
        }

        if self.min_spawn_delay_ms > self.max_spawn_delay_ms {
            return Err(GameError::Config(format!(
                "min_spawn_delay_ms ({}) must be <= max_spawn_delay_ms ({})",
                self.min_spawn_delay_ms, self.max_spawn_delay_ms
            )));
        }

        if self.tip_partial > self.tip_perfect {
            return Err(GameError::Config(format!(
                "tip_partial ({}) must be <= tip_perfect ({})",
                self.tip_partial, self.tip_perfect
            )));
        }

        Ok(())
    }

    /// Load a config from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a config from a TOML string and validate it
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| GameError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
