//! Entry-capacity LRU cache store.
//!
//! The cache is a flat address → value mapping with a total recency order.
//! Capacity is counted in entries, not bytes. A lookup hit promotes the
//! entry to most-recently-used; inserting at capacity silently evicts the
//! least-recently-used entry first.
//!
//! Recency is tracked with a monotonic access counter and a per-entry
//! `last_used` stamp; victim selection scans for the minimum stamp. With
//! capacities in the dozens-to-hundreds range the scan is cheaper than
//! maintaining an ordered side structure.

use std::collections::HashMap;

/// One resident cache entry.
#[derive(Clone, Copy, Debug)]
struct CacheEntry {
    value: u64,
    last_used: u64,
}

/// Entry-count-bounded LRU key/value store standing in for the cache.
#[derive(Debug)]
pub struct CacheStore {
    entries: HashMap<u64, CacheEntry>,
    capacity: usize,
    access_counter: u64,
}

impl CacheStore {
    /// Creates a cache store holding at most `capacity` entries.
    ///
    /// A zero capacity is clamped to one entry so insertion always has a
    /// slot to evict into.
    pub fn new(capacity: usize) -> Self {
        let safe_capacity = if capacity == 0 { 1 } else { capacity };
        Self {
            entries: HashMap::with_capacity(safe_capacity),
            capacity: safe_capacity,
            access_counter: 0,
        }
    }

    /// Checks residency without touching recency.
    ///
    /// Used when deduplicating speculative insertions; a speculative probe
    /// must not refresh the probed entry.
    pub fn contains(&self, addr: u64) -> bool {
        self.entries.contains_key(&addr)
    }

    /// Looks up an address, promoting it to most-recently-used on hit.
    pub fn lookup(&mut self, addr: u64) -> bool {
        self.access_counter += 1;
        let counter = self.access_counter;
        match self.entries.get_mut(&addr) {
            Some(entry) => {
                entry.last_used = counter;
                true
            }
            None => false,
        }
    }

    /// Inserts an address, or touches it if already resident.
    ///
    /// When the store is at capacity and the address is new, the
    /// least-recently-used entry is evicted first. Eviction is silent.
    pub fn insert(&mut self, addr: u64, value: u64) {
        self.access_counter += 1;
        let counter = self.access_counter;
        if let Some(entry) = self.entries.get_mut(&addr) {
            entry.value = value;
            entry.last_used = counter;
            return;
        }
        if self.entries.len() >= self.capacity {
            self.evict_lru();
        }
        let _ = self.entries.insert(
            addr,
            CacheEntry {
                value,
                last_used: counter,
            },
        );
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are resident.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured entry capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes the entry with the smallest `last_used` stamp.
    fn evict_lru(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(&addr, _)| addr);
        if let Some(addr) = victim {
            let _ = self.entries.remove(&addr);
        }
    }
}
