//! Tiered result cache for derived astrological artifacts.
//!
//! Birth charts and comparison profiles are expensive to derive and
//! perfectly reproducible, so they are memoized rather than recomputed:
//! a bounded in-process fast tier in front of an optional durable
//! key-value store, with per-key single-flight so concurrent misses run
//! one computation.
//!
//! Two retention classes cover the access pattern: [`RetentionClass::LongTerm`]
//! for the caller's own chart (a year, no resident cap) and
//! [`RetentionClass::ShortTerm`] for comparison profiles (a month, at most
//! 25 resident in the fast tier).

pub mod entry;
pub mod error;
pub mod memoizer;
pub mod memory;
pub mod store;

pub use entry::{CacheEntry, RetentionClass, StoredEntry};
pub use error::CacheError;
pub use memoizer::TieredCache;
pub use memory::{DEFAULT_FAST_CAPACITY, FastTier};
pub use store::{KeyValueStore, MemoryStore};
