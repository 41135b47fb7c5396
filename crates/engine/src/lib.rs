//! Trace-driven memory-hierarchy simulator library.
//!
//! This crate replays recorded memory-access traces against a two-level
//! hierarchy and measures how well pluggable prefetch strategies anticipate
//! the trace. It provides:
//! 1. **Stores:** an entry-capacity LRU cache and a byte-capacity LRU backing store.
//! 2. **Strategies:** stride, best-offset, GHB, AMPM, SMS, and two learned prefetchers behind one trait.
//! 3. **Accounting:** speculative-address tracking with single-shot confirmed/useless resolution.
//! 4. **Engine:** strict in-order replay of an operation sequence, updating running counters.
//! 5. **Reporting:** derived hit/miss/prefetch-accuracy metrics rendered at report time.
//!
//! The simulator is a functional hit/miss model: it tracks occupancy and
//! recency, not data contents or timing. Each run owns its state exclusively,
//! so batches over (trace, strategy) pairs parallelize by constructing one
//! [`Simulator`] per pair.

/// Common value types (addresses, operations, errors).
pub mod common;
/// Simulator configuration (defaults, strategy selection, JSON loading).
pub mod config;
/// Prefetch strategy trait and concrete implementations.
pub mod prefetch;
/// Simulation engine, prefetch accounting, and trace parsing.
pub mod sim;
/// Running counters and report rendering.
pub mod stats;
/// Cache and backing-memory stores.
pub mod store;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Strategy contract implemented by every prefetcher variant.
pub use crate::prefetch::Prefetcher;
/// Top-level engine; constructed per (trace, strategy) run.
pub use crate::sim::Simulator;
/// Derived metrics snapshot produced at report time.
pub use crate::stats::Report;
/// Monotonic counters updated during a run.
pub use crate::stats::Stats;
