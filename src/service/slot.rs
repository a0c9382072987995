//! Customer slot - one seat's order lifecycle
//!
//! Each seat cycles Empty -> Waiting -> Happy/Angry -> Empty for the whole
//! process lifetime. Resolution is deferred until both categories of the
//! order have been delivered (or the deadline expires), so a waiting seat
//! always shows exactly its outstanding items.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::types::{elapsed_secs, Millis};
use crate::menu::{DrinkKind, FoodKind, MenuItem, Order};

/// Occupancy state of a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerState {
    /// Nobody seated; eligible for spawn scheduling
    Empty,
    /// Customer seated with an open order and a running deadline
    Waiting,
    /// Order resolved favorably; lingering until departure
    Happy,
    /// Order failed or timed out; lingering until departure
    Angry,
}

/// How a resolved order turned out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderOutcome {
    /// Both items matched the order
    Perfect,
    /// Exactly one item matched
    ///
    /// Still resolves happy; the reduced tip is the only penalty.
    Partial,
    /// Neither item matched
    Wrong,
    /// Deadline expired before both items arrived
    TimedOut,
}

/// Result of offering an item to a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryResult {
    /// Precondition unmet (not waiting, category already filled). Not an
    /// error; callers are expected to check state first.
    Ignored,
    /// Item taken, but the other category is still outstanding
    Accepted,
    /// Both categories present; the order is resolved and the tip fixed
    Resolved { outcome: OrderOutcome, tip: u32 },
}

/// What happened to a seat during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTick {
    Idle,
    /// The order deadline expired; the customer is now angry
    TimedOut,
    /// The departure delay elapsed; the seat is empty again
    Departed,
}

/// One customer seat and its order state machine
///
/// Created once per seat index and reused forever; `reset` returns it to
/// the empty baseline, it is never destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSlot {
    state: CustomerState,
    order: Option<Order>,
    received_food: Option<FoodKind>,
    received_drink: Option<DrinkKind>,
    order_fulfilled: bool,
    /// When the order was taken; drives the deadline while `Waiting`
    order_taken_at: Option<Millis>,
    /// Recomputed each tick from `order_taken_at`
    remaining_order_secs: u32,
    /// When a happy/angry customer actually leaves
    departure_until: Option<Millis>,
    /// Tip fixed at resolution; readable until the seat empties
    last_order_tip: u32,
}

impl CustomerSlot {
    pub fn new() -> Self {
        Self {
            state: CustomerState::Empty,
            order: None,
            received_food: None,
            received_drink: None,
            order_fulfilled: false,
            order_taken_at: None,
            remaining_order_secs: 0,
            departure_until: None,
            last_order_tip: 0,
        }
    }

    /// Seat a new customer and draw their order
    ///
    /// No-op unless the seat is empty. Returns whether an order was drawn.
    pub fn generate_order(
        &mut self,
        now: Millis,
        rng: &mut impl Rng,
        config: &GameConfig,
    ) -> bool {
        if self.state != CustomerState::Empty {
            return false;
        }

        self.order = Some(Order::draw(rng));
        self.received_food = None;
        self.received_drink = None;
        self.order_fulfilled = false;
        self.order_taken_at = Some(now);
        self.remaining_order_secs = config.order_duration_secs;
        self.departure_until = None;
        self.last_order_tip = 0;
        self.state = CustomerState::Waiting;
        true
    }

    /// Offer an item to the seated customer
    ///
    /// Each category can be filled at most once per order. The order
    /// resolves the moment both categories are filled, regardless of
    /// correctness; until then the seat stays `Waiting`.
    pub fn receive(&mut self, item: MenuItem, now: Millis, config: &GameConfig) -> DeliveryResult {
        if self.state != CustomerState::Waiting || self.order_fulfilled {
            return DeliveryResult::Ignored;
        }
        let Some(order) = self.order else {
            return DeliveryResult::Ignored;
        };

        match item {
            MenuItem::Food(kind) if self.received_food.is_none() => {
                self.received_food = Some(kind);
            }
            MenuItem::Drink(kind) if self.received_drink.is_none() => {
                self.received_drink = Some(kind);
            }
            _ => return DeliveryResult::Ignored,
        }

        let (Some(food), Some(drink)) = (self.received_food, self.received_drink) else {
            return DeliveryResult::Accepted;
        };

        let food_correct = food == order.food;
        let drink_correct = drink == order.drink;
        let (outcome, tip) = if food_correct && drink_correct {
            (OrderOutcome::Perfect, config.tip_perfect)
        } else if food_correct || drink_correct {
            (OrderOutcome::Partial, config.tip_partial)
        } else {
            (OrderOutcome::Wrong, config.tip_wrong)
        };

        self.resolve(outcome, tip, now, config);
        DeliveryResult::Resolved { outcome, tip }
    }

    /// Advance the seat's timers
    pub fn tick(&mut self, now: Millis, config: &GameConfig) -> SlotTick {
        match self.state {
            CustomerState::Empty => SlotTick::Idle,
            CustomerState::Waiting => {
                if let Some(taken_at) = self.order_taken_at {
                    self.remaining_order_secs = config
                        .order_duration_secs
                        .saturating_sub(elapsed_secs(taken_at, now));
                }
                if self.remaining_order_secs == 0 && !self.order_fulfilled {
                    // Timed out: zero tip no matter what was already served
                    self.resolve(OrderOutcome::TimedOut, 0, now, config);
                    return SlotTick::TimedOut;
                }
                SlotTick::Idle
            }
            CustomerState::Happy | CustomerState::Angry => {
                if self.departure_until.is_some_and(|until| now >= until) {
                    self.reset();
                    return SlotTick::Departed;
                }
                SlotTick::Idle
            }
        }
    }

    /// Return the seat to the empty baseline, clearing any leftover timers
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fix the outcome: stop the order clock and arm the departure timer
    fn resolve(&mut self, outcome: OrderOutcome, tip: u32, now: Millis, config: &GameConfig) {
        self.order_fulfilled = true;
        self.order_taken_at = None;
        self.last_order_tip = tip;
        self.state = match outcome {
            OrderOutcome::Perfect | OrderOutcome::Partial => CustomerState::Happy,
            OrderOutcome::Wrong | OrderOutcome::TimedOut => CustomerState::Angry,
        };
        let delay = match self.state {
            CustomerState::Happy => config.happy_leave_delay_ms,
            _ => config.angry_leave_delay_ms,
        };
        self.departure_until = Some(now + delay);
    }

    // === Read-only state for rendering ===

    pub fn state(&self) -> CustomerState {
        self.state
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn food_received(&self) -> bool {
        self.received_food.is_some()
    }

    pub fn drink_received(&self) -> bool {
        self.received_drink.is_some()
    }

    pub fn remaining_order_secs(&self) -> u32 {
        self.remaining_order_secs
    }

    pub fn last_order_tip(&self) -> u32 {
        self.last_order_tip
    }

    pub fn is_empty(&self) -> bool {
        self.state == CustomerState::Empty
    }
}

impl Default for CustomerSlot {
    fn default() -> Self {
        Self::new()
    }
}
