//! Cache and backing-memory stores.
//!
//! Two independently bounded LRU key/value stores make up the hierarchy:
//! the [`CacheStore`] is entry-count bounded, the [`MemoryStore`] is bounded
//! by an estimated byte budget. Eviction is silent and unconditional in
//! both; neither store ever rejects an insertion.

/// Entry-capacity LRU cache store.
pub mod cache;
/// Byte-capacity LRU backing store.
pub mod memory;

pub use self::cache::CacheStore;
pub use self::memory::MemoryStore;
