//! Common value types shared across the simulator.
//!
//! This module groups the leaf types the rest of the crate builds on:
//! 1. **Addresses:** page decomposition helpers and the synthetic value hash.
//! 2. **Operations:** trace operation kinds and the (kind, address) pair.
//! 3. **Errors:** the crate-wide error enum.

/// Address helpers: page decomposition and synthetic values.
pub mod addr;
/// Crate-wide error type.
pub mod error;
/// Trace operation kinds and records.
pub mod op;

pub use self::error::SimError;
pub use self::op::{AccessKind, Operation};
