//! Service floor - customer seats, spawn scheduling, round scoring
//!
//! The tick-driven core of a round: each seat runs an independent order
//! lifecycle, the scheduler decides when empty seats attract new customers,
//! and the session tracks the countdown and the tip target.

pub mod floor;
pub mod ledger;
pub mod scheduler;
pub mod session;
pub mod slot;

pub use floor::{ServiceEvent, ServiceFloor};
pub use ledger::TipLedger;
pub use scheduler::SpawnScheduler;
pub use session::{RoundPhase, RoundResult, RoundSession, SessionEvent};
pub use slot::{CustomerSlot, CustomerState, DeliveryResult, OrderOutcome, SlotTick};
