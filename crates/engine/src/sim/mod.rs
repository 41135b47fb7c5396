//! Simulation engine, prefetch accounting, and trace input.
//!
//! This module drives the operation sequence through the stores:
//! 1. **Trace:** parsing of the on-disk trace format into operations.
//! 2. **Tracker:** outstanding speculative addresses and their resolution.
//! 3. **Simulator:** strict in-order replay updating the run counters.

/// Top-level simulation engine.
pub mod simulator;
/// Trace-line parsing and file loading.
pub mod trace;
/// Outstanding-prefetch accounting.
pub mod tracker;

pub use self::simulator::Simulator;
pub use self::trace::{load_trace, parse_line};
pub use self::tracker::PrefetchTracker;
