//! Service floor - orchestrates seats, spawning, and the round session
//!
//! Single-threaded and tick-driven: the frame loop calls `tick(now)` once
//! per frame and forwards player actions as discrete calls in between.
//! Within one tick the order is fixed: the round countdown advances first,
//! then every seat's timers, then spawn evaluation. A seat that empties on
//! this tick is therefore already eligible for re-scheduling on this same
//! tick, and a seat whose deadline expired this tick can take no further
//! deliveries.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::GameConfig;
use crate::core::types::{Millis, SeatIndex};
use crate::menu::{MenuItem, Order};
use crate::progress::LevelStore;
use crate::service::scheduler::SpawnScheduler;
use crate::service::session::{RoundPhase, RoundResult, RoundSession, SessionEvent};
use crate::service::slot::{CustomerSlot, DeliveryResult, OrderOutcome, SlotTick};

/// Events generated during a floor tick
///
/// Returned from `tick` for the presentation layer's action log; the core
/// does not retain them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceEvent {
    /// A new customer sat down and ordered
    CustomerArrived { seat: SeatIndex, order: Order },
    /// An order resolved without a delivery (currently only timeouts)
    OrderResolved {
        seat: SeatIndex,
        outcome: OrderOutcome,
        tip: u32,
    },
    /// A happy or angry customer left; the seat is empty again
    CustomerLeft { seat: SeatIndex },
    /// The round countdown hit zero; spawning is frozen
    RoundTimeUp,
    /// The round was scored
    RoundEvaluated { result: RoundResult },
}

/// The whole service floor: seats, spawn timers, session, and RNG
pub struct ServiceFloor {
    config: GameConfig,
    session: RoundSession,
    slots: Vec<CustomerSlot>,
    scheduler: SpawnScheduler,
    rng: ChaCha8Rng,
    level_store: Option<LevelStore>,
}

impl ServiceFloor {
    /// Build a floor at the given level with a seeded RNG
    ///
    /// The same seed and the same `(now, action)` stream reproduce the
    /// same round exactly.
    pub fn new(config: GameConfig, level: u32, seed: u64) -> Self {
        let seat_count = config.seat_count;
        Self {
            session: RoundSession::new(level),
            slots: (0..seat_count).map(|_| CustomerSlot::new()).collect(),
            scheduler: SpawnScheduler::new(seat_count),
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            level_store: None,
        }
    }

    /// Attach a level store; wins are persisted through it
    pub fn with_level_store(mut self, store: LevelStore) -> Self {
        self.level_store = Some(store);
        self
    }

    /// Start a round: clear every seat, re-draw every spawn delay
    pub fn start_round(&mut self, now: Millis) {
        for slot in &mut self.slots {
            slot.reset();
        }
        self.scheduler.rearm_all(now, &mut self.rng, &self.config);
        self.session.start(now, &self.config);
        tracing::info!(
            level = self.session.level(),
            target_tip = self.session.target_tip(),
            "round started"
        );
    }

    /// Advance one tick: countdown, then seats, then spawns
    pub fn tick(&mut self, now: Millis) -> Vec<ServiceEvent> {
        let Self {
            config,
            session,
            slots,
            scheduler,
            rng,
            level_store,
        } = self;
        let mut events = Vec::new();

        // 1. Round countdown and post-round transitions
        match session.tick(now, config) {
            Some(SessionEvent::TimeUp) => {
                tracing::info!(total_tip = session.total_tip(), "time's up");
                events.push(ServiceEvent::RoundTimeUp);
            }
            Some(SessionEvent::Evaluated(result)) => {
                tracing::info!(
                    won = result.won,
                    total_tip = result.total_tip,
                    target_tip = result.target_tip,
                    level = result.level,
                    "round scored"
                );
                if result.won {
                    Self::persist_level(level_store.as_ref(), result.level);
                }
                events.push(ServiceEvent::RoundEvaluated { result });
            }
            None => {}
        }

        // 2. Seat timers: deadlines before departures before new spawns
        for (seat, slot) in slots.iter_mut().enumerate() {
            match slot.tick(now, config) {
                SlotTick::TimedOut => {
                    // The ledger is frozen once the countdown ends; a late
                    // timeout still frees the seat but is not scored
                    if session.phase() == RoundPhase::Running {
                        session.record(OrderOutcome::TimedOut, 0);
                    }
                    tracing::debug!(seat, "order timed out");
                    events.push(ServiceEvent::OrderResolved {
                        seat,
                        outcome: OrderOutcome::TimedOut,
                        tip: 0,
                    });
                }
                SlotTick::Departed => {
                    scheduler.rearm(seat, now, rng, config);
                    events.push(ServiceEvent::CustomerLeft { seat });
                }
                SlotTick::Idle => {}
            }
        }

        // 3. Spawns, only while the countdown runs; an empty seat after
        // time-up stays empty
        if session.phase() == RoundPhase::Running {
            for (seat, slot) in slots.iter_mut().enumerate() {
                if slot.is_empty()
                    && scheduler.due(seat, now)
                    && slot.generate_order(now, rng, config)
                {
                    if let Some(order) = slot.order() {
                        tracing::debug!(seat, ?order, "customer arrived");
                        events.push(ServiceEvent::CustomerArrived { seat, order: *order });
                    }
                }
            }
        }

        events
    }

    /// Deliver an item to a seat
    ///
    /// Accepted only while the round is running; resolutions funnel their
    /// tips into the session ledger through this single path.
    pub fn deliver(&mut self, seat: SeatIndex, item: MenuItem, now: Millis) -> DeliveryResult {
        if self.session.phase() != RoundPhase::Running {
            return DeliveryResult::Ignored;
        }
        let Some(slot) = self.slots.get_mut(seat) else {
            return DeliveryResult::Ignored;
        };

        let result = slot.receive(item, now, &self.config);
        if let DeliveryResult::Resolved { outcome, tip } = result {
            self.session.record(outcome, tip);
            tracing::debug!(seat, ?outcome, tip, "order resolved");
        }
        result
    }

    /// Player dismissed the result screen
    pub fn acknowledge_result(&mut self) {
        self.session.acknowledge_result();
    }

    /// Drop progression back to level 1 and persist it
    ///
    /// Refused mid-round; the in-memory level and the level file change
    /// together or not at all. Returns whether the reset took effect.
    pub fn reset_level(&mut self) -> bool {
        if !self.session.set_level(1) {
            return false;
        }
        Self::persist_level(self.level_store.as_ref(), 1);
        true
    }

    fn persist_level(store: Option<&LevelStore>, level: u32) {
        if let Some(store) = store {
            if let Err(e) = store.save(level) {
                // Persistence failure is never fatal; the run continues
                tracing::warn!(level, error = %e, "failed to persist level");
            }
        }
    }

    // === Read-only state for rendering ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &RoundSession {
        &self.session
    }

    pub fn slots(&self) -> &[CustomerSlot] {
        &self.slots
    }

    pub fn slot(&self, seat: SeatIndex) -> Option<&CustomerSlot> {
        self.slots.get(seat)
    }
}
