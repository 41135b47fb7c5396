//! Byte-capacity LRU backing store.
//!
//! Stands in for RAM behind the cache. Each entry charges the budget with
//! an *estimated* size: the byte length of the decimal text of its address
//! plus that of its value. The estimate is deliberately approximate but
//! reproducible, which is what the eviction accounting needs; it is not an
//! in-memory footprint.
//!
//! A `store` never fails: before an entry that would overflow the ceiling
//! is inserted, entries are evicted least-recent-first, each eviction
//! refunding its own estimated size, until the newcomer fits. Because
//! eviction may need to pop many entries in one call, recency is kept in a
//! `BTreeMap` rank index rather than a scan.

use std::collections::{BTreeMap, HashMap};

/// One resident backing-store entry.
#[derive(Clone, Copy, Debug)]
struct MemoryEntry {
    value: u64,
    rank: u64,
    size: u64,
}

/// Size-bounded LRU key/value store standing in for RAM.
#[derive(Debug)]
pub struct MemoryStore {
    entries: HashMap<u64, MemoryEntry>,
    /// Recency rank → address; the smallest rank is the eviction victim.
    order: BTreeMap<u64, u64>,
    capacity_bytes: u64,
    usage_bytes: u64,
    next_rank: u64,
}

impl MemoryStore {
    /// Creates a backing store with the given byte ceiling.
    pub fn new(capacity_bytes: u64) -> Self {
        Self {
            entries: HashMap::new(),
            order: BTreeMap::new(),
            capacity_bytes,
            usage_bytes: 0,
            next_rank: 0,
        }
    }

    /// Estimated byte size of one entry: decimal text of address + value.
    pub fn entry_size(addr: u64, value: u64) -> u64 {
        (addr.to_string().len() + value.to_string().len()) as u64
    }

    /// Checks residency.
    pub fn contains(&self, addr: u64) -> bool {
        self.entries.contains_key(&addr)
    }

    /// Looks up a value. Reads do not reorder recency.
    pub fn lookup(&self, addr: u64) -> Option<u64> {
        self.entries.get(&addr).map(|entry| entry.value)
    }

    /// Stores a value, evicting least-recent entries until it fits.
    ///
    /// Re-storing a live address refreshes its recency rank. The ceiling is
    /// assumed to hold at least one entry; should the store drain completely
    /// while an oversized entry still does not fit, it is inserted anyway
    /// rather than looping forever.
    pub fn store(&mut self, addr: u64, value: u64) {
        if let Some(old) = self.entries.remove(&addr) {
            let _ = self.order.remove(&old.rank);
            self.usage_bytes -= old.size;
        }

        let size = Self::entry_size(addr, value);
        while self.usage_bytes + size > self.capacity_bytes {
            if !self.evict_lru() {
                break;
            }
        }

        let rank = self.next_rank;
        self.next_rank += 1;
        let _ = self.order.insert(rank, addr);
        let _ = self.entries.insert(addr, MemoryEntry { value, rank, size });
        self.usage_bytes += size;
    }

    /// Current cumulative estimated usage in bytes.
    pub fn usage_bytes(&self) -> u64 {
        self.usage_bytes
    }

    /// Configured byte ceiling.
    pub fn capacity_bytes(&self) -> u64 {
        self.capacity_bytes
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are resident.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evicts the least-recent entry, refunding its estimated size.
    ///
    /// Returns false when the store is already empty.
    fn evict_lru(&mut self) -> bool {
        let Some((&rank, &addr)) = self.order.iter().next() else {
            return false;
        };
        let _ = self.order.remove(&rank);
        if let Some(evicted) = self.entries.remove(&addr) {
            self.usage_bytes -= evicted.size;
        }
        true
    }
}
