//! Spatial Memory Streaming (SMS) Prefetcher.
//!
//! The inverse of the access map: once any part of a page is touched, SMS
//! speculates on everything around it that has *not* been recorded yet,
//! then records the touched offset. The emitted set starts at the full 16
//! regions and shrinks as low offsets of the page accumulate.
//!
//! Candidates are spaced `o << 12` from the page base and recorded offsets
//! are the raw in-page offsets, of which only values below 16 ever suppress
//! a candidate. Accuracy comparisons across strategy runs rely on these
//! exact semantics.

use std::collections::HashMap;

use super::Prefetcher;
use crate::common::addr::{page_base, page_offset};

/// Regions considered per page.
const REGIONS: u64 = 16;

/// SMS Prefetcher state.
#[derive(Debug, Default)]
pub struct SmsPrefetcher {
    /// Page base → bitmap of recorded sub-16 offsets.
    history: HashMap<u64, u16>,
}

impl SmsPrefetcher {
    /// Creates an SMS prefetcher with no pages tracked.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prefetcher for SmsPrefetcher {
    fn name(&self) -> &'static str {
        "sms"
    }

    /// Emits the page's unrecorded regions, then records the current offset.
    fn prefetch(&mut self, addr: u64) -> Vec<u64> {
        let base = page_base(addr);
        let seen = self.history.entry(base).or_insert(0);

        let candidates = (0..REGIONS)
            .filter(|&o| *seen & (1 << o) == 0)
            .map(|o| base + (o << 12))
            .collect();

        let offset = page_offset(addr);
        if offset < REGIONS {
            *seen |= 1 << offset;
        }
        candidates
    }
}
