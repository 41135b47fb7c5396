//! Access-Map Pattern Matching (AMPM) Prefetcher.
//!
//! Tracks, per 4 KiB page, a 16-slot access map at 256-byte sub-page
//! granularity (`page_offset >> 8`). Each miss marks its slot, then every
//! already-set slot of the page is re-emitted as a candidate, so the
//! candidate set for a page grows monotonically and is never cleared.
//!
//! Per-page maps are allocated on demand and never evicted; the table grows
//! with the number of distinct pages the trace touches.
//!
//! # Performance
//!
//! - **Time Complexity:** `prefetch()`: O(16) per call
//! - **Space Complexity:** O(P) where P is the number of pages touched

use std::collections::HashMap;

use super::Prefetcher;
use crate::common::addr::{PAGE_SHIFT, page_index, page_offset};

/// Slots per page map (4 KiB page / 256-byte granularity).
const MAP_SLOTS: u32 = 16;

/// Shift from a page offset to its map slot.
const SLOT_SHIFT: u32 = 8;

/// AMPM Prefetcher state.
#[derive(Debug, Default)]
pub struct AmpmPrefetcher {
    /// Page index → access bitmap, one bit per 256-byte slot.
    pages: HashMap<u64, u16>,
}

impl AmpmPrefetcher {
    /// Creates an AMPM prefetcher with no pages tracked.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prefetcher for AmpmPrefetcher {
    fn name(&self) -> &'static str {
        "ampm"
    }

    /// Marks the accessed slot and emits the page's full set of seen slots.
    fn prefetch(&mut self, addr: u64) -> Vec<u64> {
        let page = page_index(addr);
        let slot = (page_offset(addr) >> SLOT_SHIFT) as u32;
        let map = self.pages.entry(page).or_insert(0);
        *map |= 1 << slot;

        let map = *map;
        (0..MAP_SLOTS)
            .filter(|&i| map & (1 << i) != 0)
            .map(|i| (page << PAGE_SHIFT) + (u64::from(i) << SLOT_SHIFT))
            .collect()
    }
}
