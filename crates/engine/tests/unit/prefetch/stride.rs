//! Stride Prefetcher Tests.
//!
//! Verifies the two-access warm-up, the confirmed-stride prediction, and
//! the anchor behavior on a confirmed match.

use memsim_core::prefetch::{Prefetcher, StridePrefetcher};

/// A constant stride predicts one stride ahead on the third access.
#[test]
fn constant_stride_predicts_on_third_access() {
    let mut pf = StridePrefetcher::new();
    assert_eq!(pf.prefetch(100), Vec::<u64>::new(), "first access warms up");
    assert_eq!(pf.prefetch(200), Vec::<u64>::new(), "second access warms up");
    assert_eq!(pf.prefetch(300), vec![400], "confirmed stride fires");
}

/// An inconsistent stride never predicts.
#[test]
fn broken_stride_predicts_nothing() {
    let mut pf = StridePrefetcher::new();
    assert!(pf.prefetch(100).is_empty());
    assert!(pf.prefetch(250).is_empty());
    assert!(pf.prefetch(300).is_empty(), "150 then 50: no confirmation");
}

/// A confirmed prediction keeps the old anchor: the next stride is computed
/// against the address *before* the match, so the detector needs a
/// re-confirmation before firing again.
#[test]
fn confirmed_match_keeps_anchor() {
    let mut pf = StridePrefetcher::new();
    assert!(pf.prefetch(100).is_empty());
    assert!(pf.prefetch(200).is_empty());
    assert_eq!(pf.prefetch(300), vec![400]);

    // Stride is now measured from 200, not 300.
    assert!(pf.prefetch(400).is_empty(), "stride 200 recorded, no fire");
    assert_eq!(pf.prefetch(600), vec![800], "stride 200 re-confirmed");
}

/// Descending patterns work through signed stride arithmetic.
#[test]
fn descending_stride_predicts_downward() {
    let mut pf = StridePrefetcher::new();
    assert!(pf.prefetch(1000).is_empty());
    assert!(pf.prefetch(900).is_empty());
    assert_eq!(pf.prefetch(800), vec![700]);
}
