//! AMPM Prefetcher Tests.
//!
//! Verifies the per-page 16-slot access map: slot marking, cumulative
//! candidate growth, and page independence.

use memsim_core::prefetch::{AmpmPrefetcher, Prefetcher};

/// The first access to a page emits exactly its own slot address.
#[test]
fn first_access_emits_own_slot() {
    let mut pf = AmpmPrefetcher::new();
    assert_eq!(pf.prefetch(0x1000), vec![0x1000]);
}

/// Every touched slot of a page is re-emitted, in slot order.
#[test]
fn touched_slots_accumulate() {
    let mut pf = AmpmPrefetcher::new();
    assert_eq!(pf.prefetch(0x1000), vec![0x1000]); // slot 0
    assert_eq!(pf.prefetch(0x1100), vec![0x1000, 0x1100]); // slot 1
    assert_eq!(pf.prefetch(0x1234), vec![0x1000, 0x1100, 0x1200]); // slot 2
}

/// Re-touching a slot does not duplicate its candidate.
#[test]
fn repeated_slot_not_duplicated() {
    let mut pf = AmpmPrefetcher::new();
    assert_eq!(pf.prefetch(0x1000), vec![0x1000]);
    assert_eq!(pf.prefetch(0x1010), vec![0x1000], "same 256-byte slot");
}

/// Within one page, the candidate set never shrinks across successive
/// calls touching new sub-page regions.
#[test]
fn candidate_set_is_monotone() {
    let mut pf = AmpmPrefetcher::new();
    let mut previous = 0;
    for slot in [3_u64, 0, 7, 7, 12, 1, 15] {
        let candidates = pf.prefetch(0x8000 + (slot << 8));
        assert!(
            candidates.len() >= previous,
            "candidate set shrank: {} -> {}",
            previous,
            candidates.len()
        );
        previous = candidates.len();
    }
    assert_eq!(previous, 6, "six distinct slots touched");
}

/// Pages are tracked independently.
#[test]
fn pages_are_independent() {
    let mut pf = AmpmPrefetcher::new();
    assert_eq!(pf.prefetch(0x1000), vec![0x1000]);
    assert_eq!(pf.prefetch(0x5300), vec![0x5300], "fresh page, own slot only");
    assert_eq!(pf.prefetch(0x1100), vec![0x1000, 0x1100]);
}
