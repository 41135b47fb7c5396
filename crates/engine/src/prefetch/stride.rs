//! Stride Prefetcher.
//!
//! Detects constant-stride access patterns by retaining the last observed
//! address and the last observed stride. A prediction fires only when two
//! consecutive strides agree, so two accesses of warm-up happen before any
//! candidate is emitted.
//!
//! One deliberate wrinkle: a confirmed prediction does *not* refresh the
//! retained last address, so the stride is re-derived from the pre-match
//! anchor on the following call. Measured results depend on this.
//!
//! # Performance
//!
//! - **Time Complexity:** `prefetch()`: O(1)
//! - **Space Complexity:** O(1)
//! - **Best Case:** regular strided traversals (arrays, matrix walks)
//! - **Worst Case:** pointer chasing and irregular access patterns

use super::Prefetcher;

/// Stride Prefetcher state.
#[derive(Debug, Default)]
pub struct StridePrefetcher {
    /// Anchor address the next stride is computed against.
    last_address: Option<u64>,
    /// Most recently recorded stride.
    stride: Option<i64>,
}

impl StridePrefetcher {
    /// Creates a stride prefetcher with empty history.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prefetcher for StridePrefetcher {
    fn name(&self) -> &'static str {
        "stride"
    }

    /// Observes a miss and predicts one stride ahead on a confirmed match.
    ///
    /// A match returns `[addr + stride]` and leaves the anchor untouched;
    /// a mismatch records the new stride and anchor and predicts nothing.
    fn prefetch(&mut self, addr: u64) -> Vec<u64> {
        if let Some(last) = self.last_address {
            let new_stride = (addr as i64).wrapping_sub(last as i64);
            if self.stride == Some(new_stride) {
                return vec![(addr as i64).wrapping_add(new_stride) as u64];
            }
            self.stride = Some(new_stride);
        }
        self.last_address = Some(addr);
        Vec::new()
    }
}
