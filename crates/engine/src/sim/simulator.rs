//! Simulator: owns the stores, the tracker, and the active strategy.
//!
//! The engine consumes one operation at a time, in trace order. Reads route
//! through the cache store and fall through to the backing store on miss;
//! every miss additionally runs the prefetch reconciliation and lets the
//! active strategy speculate. Writes store through to both levels and never
//! miss. No operation is retried or skipped; the trace's order is the sole
//! driver of simulated time, and each engine instance owns its state
//! exclusively, so batch runs parallelize across instances.

use tracing::{debug, trace};

use crate::common::addr::value_hash;
use crate::common::{AccessKind, Operation};
use crate::config::Config;
use crate::prefetch::{self, NO_PREFETCHER, Prefetcher};
use crate::sim::tracker::PrefetchTracker;
use crate::stats::{Report, Stats};
use crate::store::{CacheStore, MemoryStore};

/// Top-level simulation engine for one (trace, strategy) run.
pub struct Simulator {
    cache: CacheStore,
    memory: MemoryStore,
    prefetcher: Option<Box<dyn Prefetcher>>,
    tracker: PrefetchTracker,
    stats: Stats,
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("prefetcher", &self.prefetcher_name())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Simulator {
    /// Creates an engine from a configuration.
    ///
    /// The strategy is constructed here, once; call sites never branch on
    /// its identity again.
    pub fn new(config: &Config) -> Self {
        Self {
            cache: CacheStore::new(config.cache.capacity),
            memory: MemoryStore::new(config.memory.ram_size_bytes()),
            prefetcher: prefetch::build(&config.prefetch),
            tracker: PrefetchTracker::new(),
            stats: Stats::default(),
        }
    }

    /// Replays a whole trace, strictly in order.
    pub fn run(&mut self, operations: &[Operation]) {
        for op in operations {
            self.apply(op);
        }
        debug!(
            accesses = self.stats.access_count,
            hits = self.stats.cache_hit,
            misses = self.stats.cache_miss,
            issued = self.tracker.issued(),
            "trace exhausted"
        );
    }

    /// Applies one operation.
    pub fn apply(&mut self, op: &Operation) {
        match op.kind {
            AccessKind::DataRead | AccessKind::InstRead => {
                self.read(op.addr, op.kind.is_instruction());
            }
            AccessKind::DataWrite | AccessKind::InstWrite => {
                self.write(op.addr, op.kind.is_instruction());
            }
        }
    }

    /// Simulates a read.
    ///
    /// A hit promotes the entry and consumes a matching outstanding
    /// prefetch. A miss fills the cache from the backing store when the
    /// address is resident there, then reconciles the outstanding set and
    /// lets the strategy speculate.
    pub fn read(&mut self, addr: u64, is_instruction: bool) {
        self.stats.access_count += 1;
        if is_instruction {
            self.stats.inst_reads += 1;
        } else {
            self.stats.reads += 1;
        }

        if self.cache.lookup(addr) {
            self.stats.cache_hit += 1;
            if self.tracker.confirm(addr) {
                self.stats.prefetches += 1;
            }
            return;
        }

        self.stats.cache_miss += 1;
        if let Some(value) = self.memory.lookup(addr) {
            self.cache.insert(addr, value);
        }

        let resolution = self.tracker.resolve(addr);
        if resolution.confirmed {
            self.stats.prefetches += 1;
        }
        self.stats.useless_prefetches += resolution.useless;

        self.issue_prefetches(addr);
    }

    /// Simulates a write: store-through to memory and cache.
    ///
    /// Writes create entries rather than probing for them, so they count
    /// neither hits nor misses and never trigger speculation.
    pub fn write(&mut self, addr: u64, is_instruction: bool) {
        self.stats.access_count += 1;
        if is_instruction {
            self.stats.inst_writes += 1;
        } else {
            self.stats.writes += 1;
        }

        let value = value_hash(addr);
        self.memory.store(addr, value);
        self.cache.insert(addr, value);
    }

    /// Runs the strategy for a missed address and materializes candidates.
    ///
    /// Candidates already resident in either store are dropped; the rest
    /// are inserted into the cache with synthesized values and registered
    /// as outstanding.
    fn issue_prefetches(&mut self, addr: u64) {
        let Some(prefetcher) = self.prefetcher.as_mut() else {
            return;
        };
        for candidate in prefetcher.prefetch(addr) {
            if self.cache.contains(candidate) || self.memory.contains(candidate) {
                continue;
            }
            trace!(miss = addr, candidate, "speculative insert");
            self.cache.insert(candidate, value_hash(candidate));
            self.tracker.register(candidate);
        }
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Builds the derived-metrics report for the current counters.
    pub fn report(&self) -> Report {
        Report::new(
            self.stats.clone(),
            self.memory.usage_bytes(),
            self.memory.capacity_bytes(),
        )
    }

    /// Label of the active strategy, for report naming.
    pub fn prefetcher_name(&self) -> &'static str {
        self.prefetcher
            .as_deref()
            .map_or(NO_PREFETCHER, |p| p.name())
    }

    /// Speculative addresses still awaiting resolution.
    pub fn pending_prefetches(&self) -> usize {
        self.tracker.pending()
    }

    /// Total speculative addresses issued over the run.
    pub fn issued_prefetches(&self) -> u64 {
        self.tracker.issued()
    }

    /// The active strategy, for external training collaborators.
    pub fn prefetcher_mut(&mut self) -> Option<&mut (dyn Prefetcher + 'static)> {
        self.prefetcher.as_deref_mut()
    }
}
