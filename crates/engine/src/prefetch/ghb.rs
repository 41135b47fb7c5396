//! Global History Buffer Prefetcher.
//!
//! Keeps a sliding window of the last three miss addresses and predicts a
//! continuation only when the two most recent strides agree — a
//! second-order confirmation that filters one-off jumps the plain stride
//! detector would chase.

use std::collections::VecDeque;

use super::Prefetcher;

/// Miss addresses retained in the sliding window.
const HISTORY_DEPTH: usize = 3;

/// Global History Buffer state.
#[derive(Debug, Default)]
pub struct GhbPrefetcher {
    /// Fixed-length window, oldest first.
    history: VecDeque<u64>,
}

impl GhbPrefetcher {
    /// Creates a GHB prefetcher with an empty window.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prefetcher for GhbPrefetcher {
    fn name(&self) -> &'static str {
        "ghb"
    }

    /// Records the address and predicts only on two equal successive strides.
    fn prefetch(&mut self, addr: u64) -> Vec<u64> {
        self.history.push_back(addr);
        if self.history.len() > HISTORY_DEPTH {
            let _ = self.history.pop_front();
        }
        if self.history.len() == HISTORY_DEPTH {
            let s1 = (self.history[1] as i64).wrapping_sub(self.history[0] as i64);
            let s2 = (self.history[2] as i64).wrapping_sub(self.history[1] as i64);
            if s1 == s2 {
                return vec![(self.history[2] as i64).wrapping_add(s1) as u64];
            }
        }
        Vec::new()
    }
}
