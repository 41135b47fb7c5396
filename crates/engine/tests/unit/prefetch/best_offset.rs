//! Best-Offset Prefetcher Tests.

use memsim_core::prefetch::{BestOffsetPrefetcher, Prefetcher};

/// Always predicts exactly one address, the fixed offset past the miss.
#[test]
fn predicts_fixed_offset() {
    let mut pf = BestOffsetPrefetcher::new(64);
    assert_eq!(pf.prefetch(0x1000), vec![0x1040]);
    assert_eq!(pf.prefetch(0x2000), vec![0x2040]);
}

/// The offset is configurable.
#[test]
fn custom_offset() {
    let mut pf = BestOffsetPrefetcher::new(0x64);
    assert_eq!(pf.prefetch(0x1000), vec![0x1064]);
}

/// Stateless: the same input always yields the same prediction.
#[test]
fn repeated_input_repeats_prediction() {
    let mut pf = BestOffsetPrefetcher::new(64);
    assert_eq!(pf.prefetch(0x3000), pf.prefetch(0x3000));
}
