//! SMS Prefetcher Tests.
//!
//! Verifies the emit-then-record order and the shrinking candidate set as
//! low in-page offsets accumulate.

use memsim_core::prefetch::{Prefetcher, SmsPrefetcher};

/// The first touch of a page emits all 16 regions, spaced one page apart
/// from the page base.
#[test]
fn first_touch_emits_all_regions() {
    let mut pf = SmsPrefetcher::new();
    let candidates = pf.prefetch(0x3005);
    assert_eq!(candidates.len(), 16);
    assert_eq!(candidates[0], 0x3000);
    assert_eq!(candidates[1], 0x4000);
    assert_eq!(candidates[15], 0x3000 + (15 << 12));
}

/// The touched offset is recorded *after* emission, so it disappears only
/// from the following call's candidates.
#[test]
fn recording_happens_after_emission() {
    let mut pf = SmsPrefetcher::new();
    assert_eq!(pf.prefetch(0x3005).len(), 16);

    let second = pf.prefetch(0x3005);
    assert_eq!(second.len(), 15);
    assert!(
        !second.contains(&(0x3000 + (5 << 12))),
        "offset 5 is recorded now"
    );
}

/// Only in-page offsets below 16 ever suppress a candidate; larger offsets
/// leave the set unchanged.
#[test]
fn high_offsets_do_not_suppress() {
    let mut pf = SmsPrefetcher::new();
    assert_eq!(pf.prefetch(0x3005).len(), 16);
    assert_eq!(pf.prefetch(0x3042).len(), 15, "offset 0x42 records nothing");
    assert_eq!(pf.prefetch(0x3999).len(), 15);
}

/// The candidate set shrinks as low offsets of the page accumulate.
#[test]
fn candidates_shrink_as_page_fills() {
    let mut pf = SmsPrefetcher::new();
    assert_eq!(pf.prefetch(0x7000).len(), 16); // records offset 0
    assert_eq!(pf.prefetch(0x7001).len(), 15); // records offset 1
    assert_eq!(pf.prefetch(0x7002).len(), 14); // records offset 2
    let fourth = pf.prefetch(0x7003);
    assert_eq!(fourth.len(), 13);
    assert!(!fourth.contains(&0x7000));
    assert!(!fourth.contains(&0x9000), "offset 2 maps to base + 2 pages");
}

/// Pages are tracked independently by their aligned base.
#[test]
fn pages_are_independent() {
    let mut pf = SmsPrefetcher::new();
    assert_eq!(pf.prefetch(0x3000).len(), 16);
    assert_eq!(pf.prefetch(0x4000).len(), 16, "fresh page starts full");
    assert_eq!(pf.prefetch(0x3001).len(), 15);
}
