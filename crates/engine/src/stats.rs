//! Simulation statistics collection and reporting.
//!
//! This module tracks the counters of one simulation run. It provides:
//! 1. **Counters:** access, hit/miss, read/write split, prefetch accounting — monotonic, never derived.
//! 2. **Report:** a snapshot with derived rates, computed only at report time.
//! 3. **Rendering:** the banner-framed textual summary the result files carry.
//!
//! Replaying an identical trace through an identical configuration twice
//! yields bit-identical `Stats`; nothing here reads wall-clock time.

use std::fmt;

use serde::Serialize;

/// Monotonically increasing counters for one simulation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Total operations processed.
    pub access_count: u64,
    /// Cache lookups that hit.
    pub cache_hit: u64,
    /// Cache lookups that missed.
    pub cache_miss: u64,
    /// Data reads processed.
    pub reads: u64,
    /// Data writes processed.
    pub writes: u64,
    /// Instruction reads processed.
    pub inst_reads: u64,
    /// Instruction writes processed.
    pub inst_writes: u64,
    /// Speculative addresses confirmed by a matching real access.
    pub prefetches: u64,
    /// Speculative addresses discarded unconfirmed at a reconciliation.
    pub useless_prefetches: u64,
}

/// Derived-metrics snapshot of a finished (or in-flight) run.
///
/// Rates are computed here, at construction, and nowhere else; a zero
/// denominator yields a zero rate rather than a division error.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    /// Raw counters the derived values came from.
    pub stats: Stats,
    /// Confirmed + useless prefetches: every speculation ever resolved.
    pub total_prefetches: u64,
    /// Backing-store usage at report time, whole megabytes.
    pub ram_usage_mb: u64,
    /// Backing-store ceiling, whole megabytes.
    pub ram_capacity_mb: u64,
    /// Hits over accesses, in [0, 1].
    pub hit_rate: f64,
    /// Misses over accesses, in [0, 1].
    pub miss_rate: f64,
    /// Confirmed prefetches over total prefetches, as a percentage.
    pub prefetch_hit_rate: f64,
}

impl Report {
    /// Builds a report from the run counters and backing-store occupancy.
    pub fn new(stats: Stats, ram_usage_bytes: u64, ram_capacity_bytes: u64) -> Self {
        let total_prefetches = stats.prefetches + stats.useless_prefetches;
        let hit_rate = ratio(stats.cache_hit, stats.access_count);
        let miss_rate = ratio(stats.cache_miss, stats.access_count);
        let prefetch_hit_rate = ratio(stats.prefetches, total_prefetches) * 100.0;
        Self {
            stats,
            total_prefetches,
            ram_usage_mb: ram_usage_bytes / (1024 * 1024),
            ram_capacity_mb: ram_capacity_bytes / (1024 * 1024),
            hit_rate,
            miss_rate,
            prefetch_hit_rate,
        }
    }
}

/// Guarded division: 0 when the denominator is 0.
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=========================Simulation Results========================="
        )?;
        writeln!(f, "Access count : \t{}", self.stats.access_count)?;
        writeln!(
            f,
            "[HIT] : \t{}\t  [MISS] : \t{}",
            self.stats.cache_hit, self.stats.cache_miss
        )?;
        writeln!(
            f,
            "[DATA READS] : \t{}\t  [DATA WRITES] : \t{}",
            self.stats.reads, self.stats.writes
        )?;
        writeln!(
            f,
            "[INST READS] : \t{}\t  [INST WRITES] : \t{}",
            self.stats.inst_reads, self.stats.inst_writes
        )?;
        writeln!(
            f,
            "[PREFETCHES] : \t{}\t  [USELESS PREFETCHES] : \t{}",
            self.total_prefetches, self.stats.useless_prefetches
        )?;
        writeln!(
            f,
            "Current RAM Usage : \t{} MB / {} MB",
            self.ram_usage_mb, self.ram_capacity_mb
        )?;
        writeln!(f, "=========================SUMMARY=========================")?;
        writeln!(f, "[TOTAL HIT RATE] : \t{:.2}", self.hit_rate)?;
        writeln!(f, "[TOTAL MISS RATE] : \t{:.2}", self.miss_rate)?;
        writeln!(f, "[PREFETCH HIT RATE] : \t{:.2}", self.prefetch_hit_rate)?;
        writeln!(f, "=========================END=========================")
    }
}
