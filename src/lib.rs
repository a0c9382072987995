//! Sushi Rush - timed restaurant-service round simulation
//!
//! The core of the game: per-seat customer state machines, randomized spawn
//! scheduling, per-order deadlines, tip scoring, and round/level progression.
//! Rendering, input, and audio live outside this crate; they drive the core
//! through discrete actions and `tick(now)` calls and read its state back.

pub mod core;
pub mod menu;
pub mod prep;
pub mod progress;
pub mod service;
