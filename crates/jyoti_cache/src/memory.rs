//! Bounded in-memory fast tier.
//!
//! A `HashMap` paired with an insertion-order queue. Eviction is strictly
//! oldest-inserted-first: once the tier is at global capacity the globally
//! oldest entry goes, and a short-term insert that would exceed the
//! short-term resident cap evicts the oldest short-term entry first.
//! Expired entries are dropped lazily on read or by an explicit sweep.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};

use crate::entry::{CacheEntry, RetentionClass};

/// Default global capacity of the fast tier.
pub const DEFAULT_FAST_CAPACITY: usize = 512;

/// Insertion-ordered bounded map of cache entries.
#[derive(Debug)]
pub struct FastTier<T> {
    map: HashMap<String, CacheEntry<T>>,
    /// Keys in insertion order, oldest first.
    order: VecDeque<String>,
    capacity: usize,
}

impl<T> FastTier<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            map: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Resident entries of one retention class.
    pub fn class_len(&self, class: RetentionClass) -> usize {
        self.map.values().filter(|e| e.class == class).count()
    }

    /// Expiry-checked read; an expired entry is removed and reported as a
    /// miss.
    pub fn get(&mut self, key: &str, now: DateTime<Utc>) -> Option<&CacheEntry<T>> {
        if self.map.get(key).is_some_and(|e| e.is_expired(now)) {
            self.remove(key);
            return None;
        }
        self.map.get(key)
    }

    /// Insert an entry, applying the class cap and the global capacity.
    ///
    /// An overwrite frees its own slot before the caps are checked, so it
    /// never evicts an unrelated entry; it counts as a fresh arrival for
    /// eviction ordering.
    pub fn insert(&mut self, key: impl Into<String>, entry: CacheEntry<T>) {
        let key = key.into();
        self.remove(&key);

        if let Some(cap) = entry.class.resident_cap() {
            while self.class_len(entry.class) >= cap {
                if !self.evict_oldest_of_class(entry.class) {
                    break;
                }
            }
        }
        while self.map.len() >= self.capacity {
            if self.evict_oldest().is_none() {
                break;
            }
        }

        self.order.push_back(key.clone());
        self.map.insert(key, entry);
    }

    pub fn remove(&mut self, key: &str) -> Option<CacheEntry<T>> {
        let removed = self.map.remove(key);
        if removed.is_some() {
            self.order.retain(|k| k != key);
        }
        removed
    }

    /// Drop every expired entry; returns how many were removed.
    pub fn sweep_expired(&mut self, now: DateTime<Utc>) -> usize {
        let expired: Vec<String> = self
            .map
            .iter()
            .filter(|(_, e)| e.is_expired(now))
            .map(|(k, _)| k.clone())
            .collect();
        for key in &expired {
            self.remove(key);
        }
        expired.len()
    }

    /// Evict the globally oldest entry. Returns its key.
    fn evict_oldest(&mut self) -> Option<String> {
        let key = self.order.pop_front()?;
        self.map.remove(&key);
        Some(key)
    }

    /// Evict the oldest entry of one class. Returns whether one was found.
    fn evict_oldest_of_class(&mut self, class: RetentionClass) -> bool {
        let victim = self
            .order
            .iter()
            .find(|k| self.map.get(*k).is_some_and(|e| e.class == class))
            .cloned();
        match victim {
            Some(key) => {
                self.remove(&key);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for FastTier<T> {
    fn default() -> Self {
        Self::new(DEFAULT_FAST_CAPACITY)
    }
}
