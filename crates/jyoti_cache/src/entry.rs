//! Cache entries and retention classes.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Retention policy attached to every cache write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RetentionClass {
    /// The caller's own profile data: ~1 year, no resident-count cap.
    LongTerm,
    /// Secondary/comparison profiles: ~30 days, at most 25 resident
    /// entries, strictly oldest-inserted evicted first.
    ShortTerm,
}

impl RetentionClass {
    /// Time-to-live for entries of this class.
    pub fn ttl(self) -> TimeDelta {
        match self {
            Self::LongTerm => TimeDelta::days(365),
            Self::ShortTerm => TimeDelta::days(30),
        }
    }

    /// Resident-entry cap in the fast tier, if the class has one.
    pub const fn resident_cap(self) -> Option<usize> {
        match self {
            Self::LongTerm => None,
            Self::ShortTerm => Some(25),
        }
    }
}

/// One fast-tier entry: a value with its insertion stamp and policy.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub inserted_at: DateTime<Utc>,
    pub class: RetentionClass,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, class: RetentionClass, now: DateTime<Utc>) -> Self {
        Self {
            value,
            inserted_at: now,
            class,
        }
    }

    /// Whether the entry has outlived its class TTL at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.inserted_at >= self.class.ttl()
    }
}

/// Durable-tier wire form of an entry, JSON-encoded.
///
/// The TTL rides along in seconds so the store can honor it as a hint
/// even though expiry is re-checked on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEntry<T> {
    pub value: T,
    pub inserted_at: DateTime<Utc>,
    pub ttl_seconds: i64,
    pub class: RetentionClass,
}

impl<T> StoredEntry<T> {
    pub fn from_entry(entry: &CacheEntry<T>) -> Self
    where
        T: Clone,
    {
        Self {
            value: entry.value.clone(),
            inserted_at: entry.inserted_at,
            ttl_seconds: entry.class.ttl().num_seconds(),
            class: entry.class,
        }
    }

    /// Whether the stored entry is past its recorded TTL at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.inserted_at >= TimeDelta::seconds(self.ttl_seconds)
    }
}
