//! Outstanding-prefetch accounting.
//!
//! Tracks the addresses currently cache-resident because a strategy
//! speculated on them. An address enters the set only via a successful
//! speculative insertion and leaves exactly once: consumed by a matching
//! real access, or discarded when a different address triggers the next
//! miss-side reconciliation.
//!
//! Resolution is single-shot per miss window: at each miss, exactly one
//! outstanding candidate can be deemed useful (the missed address itself)
//! and every other one is charged useless and dropped. This judges a
//! strategy's batch only against the very next miss — deliberately
//! pessimistic, and accuracy numbers are comparable across strategies only
//! under this one rule.

use std::collections::HashSet;

/// Outcome of a miss-side reconciliation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The missed address itself was outstanding.
    pub confirmed: bool,
    /// Outstanding candidates discarded unconfirmed.
    pub useless: u64,
}

/// Set of speculative addresses awaiting confirmation.
#[derive(Debug, Default)]
pub struct PrefetchTracker {
    outstanding: HashSet<u64>,
    issued: u64,
}

impl PrefetchTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a freshly issued speculative address.
    pub fn register(&mut self, addr: u64) {
        if self.outstanding.insert(addr) {
            self.issued += 1;
        }
    }

    /// Hit-side confirmation: consumes `addr` if it is outstanding.
    ///
    /// Returns true when the speculation paid off. Removing the address
    /// here keeps it from being double-counted at a later reconciliation.
    pub fn confirm(&mut self, addr: u64) -> bool {
        self.outstanding.remove(&addr)
    }

    /// Miss-side reconciliation: resolves the whole outstanding set.
    ///
    /// `addr` counts as confirmed if outstanding; everything else is
    /// charged useless. The set is empty afterwards.
    pub fn resolve(&mut self, addr: u64) -> Resolution {
        let confirmed = self.outstanding.remove(&addr);
        let useless = self.outstanding.len() as u64;
        self.outstanding.clear();
        Resolution { confirmed, useless }
    }

    /// Addresses currently awaiting confirmation.
    pub fn pending(&self) -> usize {
        self.outstanding.len()
    }

    /// Total speculative addresses ever registered.
    ///
    /// At any point, `confirmed + useless + pending` across the run equals
    /// this count — the conservation property reports rely on.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}
