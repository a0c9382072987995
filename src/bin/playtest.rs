//! Automated playtester - runs scripted service rounds headlessly
//!
//! Simulates a waiter bot with a configurable reaction time and accuracy,
//! playing full rounds against a seeded floor. Useful for tuning the config
//! and for eyeballing pacing without the renderer.

use std::collections::HashMap;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use sushi_rush::core::config::GameConfig;
use sushi_rush::core::types::Millis;
use sushi_rush::menu::{DrinkKind, FoodKind, MenuItem};
use sushi_rush::progress::LevelStore;
use sushi_rush::service::{RoundPhase, ServiceEvent, ServiceFloor};

/// Tick step in milliseconds; mirrors a ~10 fps frame loop
const TICK_STEP_MS: Millis = 100;

/// Headless playtest - scripted waiter bot playing service rounds
#[derive(Parser, Debug)]
#[command(name = "playtest")]
#[command(about = "Run scripted service rounds and report scores")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of rounds to play
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    /// Starting level when no level file is given
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Level file to load progression from and persist wins to
    #[arg(long)]
    level_file: Option<std::path::PathBuf>,

    /// Probability the bot serves the correct item (0.0-1.0)
    #[arg(long, default_value_t = 0.9)]
    skill: f64,

    /// Bot reaction time before the first item of an order (ms)
    #[arg(long, default_value_t = 1_500)]
    reaction_ms: u64,

    /// Optional TOML config overriding the defaults
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

/// Per-round summary
#[derive(Serialize)]
struct RoundReport {
    round: u32,
    level: u32,
    won: bool,
    total_tip: u32,
    target_tip: u32,
    orders_resolved: u32,
    perfect: u32,
    partial: u32,
    wrong: u32,
    timed_out: u32,
}

/// The scripted waiter: serves each waiting seat food-then-drink after a
/// fixed reaction delay, with a skill-based chance of grabbing the right
/// item.
struct WaiterBot {
    rng: ChaCha8Rng,
    skill: f64,
    reaction_ms: u64,
    arrivals: HashMap<usize, Millis>,
}

impl WaiterBot {
    fn new(seed: u64, skill: f64, reaction_ms: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            skill,
            reaction_ms,
            arrivals: HashMap::new(),
        }
    }

    fn observe(&mut self, events: &[ServiceEvent], now: Millis) {
        for event in events {
            match event {
                ServiceEvent::CustomerArrived { seat, .. } => {
                    self.arrivals.insert(*seat, now);
                }
                ServiceEvent::CustomerLeft { seat }
                | ServiceEvent::OrderResolved { seat, .. } => {
                    self.arrivals.remove(seat);
                }
                _ => {}
            }
        }
    }

    fn act(&mut self, floor: &mut ServiceFloor, now: Millis) {
        let seats: Vec<usize> = self.arrivals.keys().copied().collect();
        for seat in seats {
            let Some(&arrived_at) = self.arrivals.get(&seat) else {
                continue;
            };
            if now < arrived_at + self.reaction_ms {
                continue;
            }
            let Some(slot) = floor.slot(seat) else { continue };
            let Some(order) = slot.order().copied() else { continue };

            // One item per tick per seat, food before drink
            let item = if !slot.food_received() {
                MenuItem::Food(self.pick_food(order.food))
            } else if !slot.drink_received() {
                MenuItem::Drink(self.pick_drink(order.drink))
            } else {
                continue;
            };
            floor.deliver(seat, item, now);
        }
    }

    fn pick_food(&mut self, correct: FoodKind) -> FoodKind {
        if self.rng.gen_bool(self.skill) {
            correct
        } else {
            FoodKind::sample(&mut self.rng)
        }
    }

    fn pick_drink(&mut self, correct: DrinkKind) -> DrinkKind {
        if self.rng.gen_bool(self.skill) {
            correct
        } else {
            DrinkKind::sample(&mut self.rng)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load_from_toml(path).expect("Failed to load config"),
        None => GameConfig::default(),
    };

    let mut floor = match &args.level_file {
        Some(path) => {
            let store = LevelStore::new(path);
            let level = store.load();
            ServiceFloor::new(config, level, args.seed).with_level_store(store)
        }
        None => ServiceFloor::new(config, args.level, args.seed),
    };
    let mut bot = WaiterBot::new(args.seed.wrapping_add(1), args.skill, args.reaction_ms);
    let mut reports = Vec::new();
    let mut now: Millis = 0;

    for round in 1..=args.rounds {
        let level = floor.session().level();
        floor.start_round(now);

        // Play until the round is scored
        while floor.session().phase() != RoundPhase::ShowingResult {
            now += TICK_STEP_MS;
            let events = floor.tick(now);
            bot.observe(&events, now);
            if floor.session().phase() == RoundPhase::Running {
                bot.act(&mut floor, now);
            }
        }

        let result = *floor
            .session()
            .last_result()
            .expect("round finished without a result");
        let ledger = floor.session().ledger();
        reports.push(RoundReport {
            round,
            level,
            won: result.won,
            total_tip: result.total_tip,
            target_tip: result.target_tip,
            orders_resolved: ledger.orders_resolved(),
            perfect: ledger.perfect_count(),
            partial: ledger.partial_count(),
            wrong: ledger.wrong_count(),
            timed_out: ledger.timed_out_count(),
        });

        floor.acknowledge_result();
        bot.arrivals.clear();
        now += 1_000; // breather between rounds
    }

    if args.format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("Failed to serialize report")
        );
    } else {
        println!("=== Sushi Rush Playtest (seed {}) ===\n", args.seed);
        for r in &reports {
            println!(
                "Round {} (level {}): {} - {}/{} tips | {} orders: {} perfect, {} partial, {} wrong, {} timed out",
                r.round,
                r.level,
                if r.won { "WON" } else { "LOST" },
                r.total_tip,
                r.target_tip,
                r.orders_resolved,
                r.perfect,
                r.partial,
                r.wrong,
                r.timed_out,
            );
        }
    }
}
