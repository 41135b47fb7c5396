//! Global History Buffer Tests.
//!
//! Verifies the three-deep sliding window and the second-order stride
//! confirmation rule.

use memsim_core::prefetch::{GhbPrefetcher, Prefetcher};

/// Two equal successive strides produce a continuation.
#[test]
fn equal_strides_predict_continuation() {
    let mut pf = GhbPrefetcher::new();
    assert!(pf.prefetch(100).is_empty());
    assert!(pf.prefetch(200).is_empty());
    assert_eq!(pf.prefetch(300), vec![400]);
}

/// Unequal strides stay silent.
#[test]
fn unequal_strides_stay_silent() {
    let mut pf = GhbPrefetcher::new();
    assert!(pf.prefetch(100).is_empty());
    assert!(pf.prefetch(250).is_empty());
    assert!(pf.prefetch(300).is_empty());
}

/// The window slides: once full, the oldest address drops out and the
/// confirmation applies to the newest three only.
#[test]
fn window_slides_past_three() {
    let mut pf = GhbPrefetcher::new();
    assert!(pf.prefetch(100).is_empty());
    assert!(pf.prefetch(200).is_empty());
    assert_eq!(pf.prefetch(300), vec![400]);
    assert_eq!(pf.prefetch(400), vec![500], "window is now 200/300/400");
}

/// A broken run recovers after two fresh equal strides.
#[test]
fn recovers_after_break() {
    let mut pf = GhbPrefetcher::new();
    assert!(pf.prefetch(100).is_empty());
    assert!(pf.prefetch(200).is_empty());
    assert!(pf.prefetch(700).is_empty(), "100/200/700: strides differ");
    assert!(pf.prefetch(800).is_empty(), "200/700/800: strides differ");
    assert_eq!(pf.prefetch(900), vec![1000], "700/800/900 confirms");
}
