//! Core type definitions used throughout the codebase

/// Monotonic clock sample in milliseconds.
///
/// The core never reads real time; the frame loop samples its clock once per
/// tick and passes the value into every `tick(now)` call, so a run is fully
/// replayable from a sequence of `(now, action)` pairs.
pub type Millis = u64;

/// Index of a customer seat at the counter
pub type SeatIndex = usize;

/// Convert a span of milliseconds to whole elapsed seconds
pub fn elapsed_secs(from: Millis, to: Millis) -> u32 {
    (to.saturating_sub(from) / 1000) as u32
}
