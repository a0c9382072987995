//! Shared types, configuration, and errors

pub mod config;
pub mod error;
pub mod types;
