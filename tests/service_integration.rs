//! Integration tests for the service floor
//!
//! These tests drive whole rounds through the public API the presentation
//! layer uses: `start_round`, `tick(now)`, and `deliver`, and verify the
//! scored outcomes and the seat lifecycle end to end.

use sushi_rush::core::config::GameConfig;
use sushi_rush::core::types::Millis;
use sushi_rush::menu::{DrinkKind, FoodKind, MenuItem, Order};
use sushi_rush::service::{
    CustomerState, DeliveryResult, OrderOutcome, RoundPhase, ServiceEvent, ServiceFloor,
};

const STEP: Millis = 100;

fn test_config() -> GameConfig {
    // Round-trip friendly numbers: 90s round, 10s orders, 20-tip perfect
    GameConfig {
        round_duration_secs: 90,
        order_duration_secs: 10,
        tip_perfect: 20,
        tip_partial: 10,
        tip_wrong: 0,
        ..Default::default()
    }
}

/// Tick forward until a customer arrives somewhere, returning (seat, order, time)
fn next_arrival(floor: &mut ServiceFloor, mut now: Millis) -> (usize, Order, Millis) {
    let deadline = now + 60_000;
    while now < deadline {
        now += STEP;
        for event in floor.tick(now) {
            if let ServiceEvent::CustomerArrived { seat, order } = event {
                return (seat, order, now);
            }
        }
    }
    panic!("no customer arrived within a minute of t={now}");
}

fn wrong_food(order: &Order) -> FoodKind {
    *FoodKind::ALL.iter().find(|k| **k != order.food).unwrap()
}

fn wrong_drink(order: &Order) -> DrinkKind {
    *DrinkKind::ALL.iter().find(|k| **k != order.drink).unwrap()
}

// ============================================================================
// Delivery outcomes
// ============================================================================

/// Correct food then correct drink within the deadline resolves happy and
/// adds the perfect tip to the round total.
#[test]
fn test_perfect_service_scores_perfect_tip() {
    let mut floor = ServiceFloor::new(test_config(), 1, 11);
    floor.start_round(0);

    let (seat, order, now) = next_arrival(&mut floor, 0);

    assert_eq!(
        floor.deliver(seat, MenuItem::Food(order.food), now + 1_000),
        DeliveryResult::Accepted
    );
    assert_eq!(
        floor.deliver(seat, MenuItem::Drink(order.drink), now + 2_000),
        DeliveryResult::Resolved {
            outcome: OrderOutcome::Perfect,
            tip: 20
        }
    );

    assert_eq!(floor.session().total_tip(), 20);
    assert_eq!(floor.slot(seat).unwrap().state(), CustomerState::Happy);
}

/// An untouched order times out after 10 seconds, the customer turns
/// angry, and the round total is unchanged.
#[test]
fn test_unserved_order_times_out_angry() {
    let mut floor = ServiceFloor::new(test_config(), 1, 12);
    floor.start_round(0);

    let (seat, _, arrived) = next_arrival(&mut floor, 0);

    let mut now = arrived;
    let mut timed_out = false;
    while now < arrived + 11_000 && !timed_out {
        now += STEP;
        for event in floor.tick(now) {
            if let ServiceEvent::OrderResolved { seat: s, outcome, tip } = event {
                assert_eq!(s, seat);
                assert_eq!(outcome, OrderOutcome::TimedOut);
                assert_eq!(tip, 0);
                timed_out = true;
            }
        }
    }

    assert!(timed_out, "order never timed out");
    assert!(now - arrived >= 10_000, "timed out before the deadline");
    assert_eq!(floor.slot(seat).unwrap().state(), CustomerState::Angry);
    assert_eq!(floor.session().total_tip(), 0);
}

#[test]
fn test_mixed_outcomes_accumulate_in_ledger() {
    let mut floor = ServiceFloor::new(test_config(), 1, 13);
    floor.start_round(0);

    // Perfect order
    let (seat, order, now) = next_arrival(&mut floor, 0);
    floor.deliver(seat, MenuItem::Food(order.food), now + 200);
    floor.deliver(seat, MenuItem::Drink(order.drink), now + 400);

    // Partial order on the next arrival
    let (seat, order, now) = next_arrival(&mut floor, now + 400);
    floor.deliver(seat, MenuItem::Food(order.food), now + 200);
    floor.deliver(seat, MenuItem::Drink(wrong_drink(&order)), now + 400);

    // Fully wrong order on the one after
    let (seat, order, now) = next_arrival(&mut floor, now + 400);
    floor.deliver(seat, MenuItem::Food(wrong_food(&order)), now + 200);
    floor.deliver(seat, MenuItem::Drink(wrong_drink(&order)), now + 400);

    assert_eq!(floor.session().total_tip(), 20 + 10 + 0);
    let ledger = floor.session().ledger();
    assert_eq!(ledger.perfect_count(), 1);
    assert_eq!(ledger.partial_count(), 1);
    assert_eq!(ledger.wrong_count(), 1);
    assert_eq!(ledger.orders_resolved(), 3);
}

// ============================================================================
// Seat lifecycle across a round
// ============================================================================

#[test]
fn test_seats_cycle_and_state_invariants_hold() {
    let mut floor = ServiceFloor::new(test_config(), 1, 14);
    floor.start_round(0);

    let round_end = 90_000;
    let mut arrivals = 0;
    let mut departures = 0;

    // A customer seated just before time-up can take until ~13s past the
    // round end to time out and depart; run long enough to drain
    let mut now = 0;
    while now < round_end + 20_000 {
        now += STEP;
        for event in floor.tick(now) {
            match event {
                ServiceEvent::CustomerArrived { .. } => arrivals += 1,
                ServiceEvent::CustomerLeft { .. } => departures += 1,
                _ => {}
            }
        }

        // A seat has an order exactly when it is occupied
        for slot in floor.slots() {
            assert_eq!(slot.order().is_some(), slot.state() != CustomerState::Empty);
            if slot.food_received() || slot.drink_received() {
                assert_ne!(slot.state(), CustomerState::Empty);
            }
        }
    }

    // With 10s orders and ~1-4s spawn delays every seat turns over
    // repeatedly in 90 seconds, even with nobody serving
    assert!(arrivals >= 10, "only {arrivals} arrivals in a full round");
    assert!(departures >= 10, "only {departures} departures in a full round");

    // Well past the round end all seats have drained empty
    assert!(floor.slots().iter().all(|s| s.is_empty()));
}

#[test]
fn test_delivery_rejected_after_time_up() {
    let mut floor = ServiceFloor::new(test_config(), 1, 15);
    floor.start_round(0);
    let (seat, order, _) = next_arrival(&mut floor, 0);

    // Run straight past the countdown without serving
    let mut now = 0;
    while floor.session().phase() == RoundPhase::Running {
        now += STEP;
        floor.tick(now);
    }

    assert_eq!(
        floor.deliver(seat, MenuItem::Food(order.food), now),
        DeliveryResult::Ignored
    );
    assert_eq!(floor.session().total_tip(), 0);
}

/// Orders that outlive the countdown still time out and free their seats,
/// but the scored ledger stays exactly as it was when time ran out.
#[test]
fn test_late_timeouts_free_seats_without_touching_the_ledger() {
    // A 5s round with 10s orders: every customer's deadline lands after
    // the round has already been scored
    let config = GameConfig {
        round_duration_secs: 5,
        order_duration_secs: 10,
        ..test_config()
    };
    let mut floor = ServiceFloor::new(config, 1, 18);
    floor.start_round(0);

    let mut late_timeouts = 0;
    let mut now = 0;
    while now < 20_000 {
        now += STEP;
        let running = floor.session().phase() == RoundPhase::Running;
        for event in floor.tick(now) {
            if let ServiceEvent::OrderResolved { outcome, .. } = event {
                assert_eq!(outcome, OrderOutcome::TimedOut);
                assert!(!running, "order timed out before the countdown ended");
                late_timeouts += 1;
            }
        }
    }

    assert!(late_timeouts > 0, "no order outlived the round");
    assert!(floor.slots().iter().all(|s| s.is_empty()));

    // The result was scored before any timeout landed; none of them count
    let ledger = floor.session().ledger();
    assert_eq!(ledger.timed_out_count(), 0);
    assert_eq!(ledger.orders_resolved(), 0);
    assert_eq!(floor.session().last_result().unwrap().total_tip, 0);
}

#[test]
fn test_round_phases_progress_in_order() {
    let config = test_config();
    let times_up_ms = config.times_up_display_ms;
    let mut floor = ServiceFloor::new(config, 1, 16);

    assert_eq!(floor.session().phase(), RoundPhase::Idle);
    floor.start_round(0);
    assert_eq!(floor.session().phase(), RoundPhase::Running);

    let mut now = 0;
    let mut saw_time_up_at = None;
    let mut saw_evaluated_at = None;
    while floor.session().phase() != RoundPhase::ShowingResult {
        now += STEP;
        for event in floor.tick(now) {
            match event {
                ServiceEvent::RoundTimeUp => saw_time_up_at = Some(now),
                ServiceEvent::RoundEvaluated { .. } => saw_evaluated_at = Some(now),
                _ => {}
            }
        }
        assert!(now < 200_000, "round never finished");
    }

    let time_up_at = saw_time_up_at.expect("no RoundTimeUp event");
    let evaluated_at = saw_evaluated_at.expect("no RoundEvaluated event");
    assert!(evaluated_at >= time_up_at + times_up_ms);

    floor.acknowledge_result();
    assert_eq!(floor.session().phase(), RoundPhase::Idle);
}

#[test]
fn test_second_round_starts_clean() {
    let mut floor = ServiceFloor::new(test_config(), 1, 17);
    floor.start_round(0);
    let (seat, order, now) = next_arrival(&mut floor, 0);
    floor.deliver(seat, MenuItem::Food(order.food), now + 200);
    floor.deliver(seat, MenuItem::Drink(order.drink), now + 400);
    assert!(floor.session().total_tip() > 0);

    // Restart mid-round: seats clear, total resets
    floor.start_round(now + 1_000);
    assert!(floor.slots().iter().all(|s| s.is_empty()));
    assert_eq!(floor.session().total_tip(), 0);
    assert_eq!(floor.session().remaining_secs(), 90);
}
