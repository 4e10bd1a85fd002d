//! Tiered single-flight memoizer.
//!
//! `TieredCache` layers the bounded fast tier over an optional durable
//! store. A miss runs the caller's compute closure at most once per key:
//! concurrent callers for the same key park on a shared `OnceCell` and all
//! receive the one computed value. A failed compute releases the cell so a
//! later caller retries.
//!
//! Durable-store problems never fail a lookup. A corrupt or unreadable
//! stored payload is treated as a miss and recomputed; a failed write is
//! logged and the computed value is still returned.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, OnceCell};

use crate::entry::{CacheEntry, RetentionClass, StoredEntry};
use crate::error::CacheError;
use crate::memory::{DEFAULT_FAST_CAPACITY, FastTier};
use crate::store::KeyValueStore;

/// Two-tier cache with per-key single-flight computation.
pub struct TieredCache<T> {
    fast: Mutex<FastTier<T>>,
    inflight: Mutex<HashMap<String, Arc<OnceCell<T>>>>,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl<T> TieredCache<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(store: Option<Arc<dyn KeyValueStore>>) -> Self {
        Self::with_capacity(DEFAULT_FAST_CAPACITY, store)
    }

    pub fn with_capacity(capacity: usize, store: Option<Arc<dyn KeyValueStore>>) -> Self {
        Self {
            fast: Mutex::new(FastTier::new(capacity)),
            inflight: Mutex::new(HashMap::new()),
            store,
        }
    }

    /// Look up `key`, computing and caching the value on a miss.
    pub async fn get_or_compute<F, Fut, E>(
        &self,
        key: &str,
        class: RetentionClass,
        compute: F,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.get_or_compute_at(key, class, Utc::now(), compute).await
    }

    /// Lookup against an explicit clock, for deterministic expiry.
    pub async fn get_or_compute_at<F, Fut, E>(
        &self,
        key: &str,
        class: RetentionClass,
        now: DateTime<Utc>,
        compute: F,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(entry) = self.fast.lock().await.get(key, now) {
            return Ok(entry.value.clone());
        }

        let cell = {
            let mut inflight = self.inflight.lock().await;
            Arc::clone(
                inflight
                    .entry(key.to_owned())
                    .or_insert_with(|| Arc::new(OnceCell::new())),
            )
        };

        let result = cell
            .get_or_try_init(|| async {
                if let Some(value) = self.durable_lookup(key, now).await {
                    self.fast
                        .lock()
                        .await
                        .insert(key, CacheEntry::new(value.clone(), class, now));
                    return Ok(value);
                }

                let value = compute().await?;
                let entry = CacheEntry::new(value.clone(), class, now);
                self.durable_write(key, &entry).await;
                self.fast.lock().await.insert(key, entry);
                Ok(value)
            })
            .await
            .cloned();

        // The value now lives in the fast tier (or the compute failed and
        // the cell was released); either way this flight is over. Remove
        // the registration only if it is still ours: a slow waiter must
        // not tear down a newer flight registered after ours finished.
        let mut inflight = self.inflight.lock().await;
        if inflight
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, &cell))
        {
            inflight.remove(key);
        }
        drop(inflight);

        result
    }

    /// Drop `key` from both tiers. A durable-store failure is reported.
    pub async fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.fast.lock().await.remove(key);
        if let Some(store) = &self.store {
            store.remove(key).await?;
        }
        Ok(())
    }

    /// Purge expired fast-tier entries; returns how many were dropped.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        self.fast.lock().await.sweep_expired(now)
    }

    pub async fn fast_len(&self) -> usize {
        self.fast.lock().await.len()
    }

    async fn durable_lookup(&self, key: &str, now: DateTime<Utc>) -> Option<T> {
        let store = self.store.as_ref()?;
        let bytes = match store.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                warn!("durable read failed for {key}: {err}");
                return None;
            }
        };
        match serde_json::from_slice::<StoredEntry<T>>(&bytes) {
            Ok(stored) if stored.is_expired(now) => None,
            Ok(stored) => Some(stored.value),
            Err(err) => {
                debug!("discarding undecodable durable entry for {key}: {err}");
                None
            }
        }
    }

    async fn durable_write(&self, key: &str, entry: &CacheEntry<T>) {
        let Some(store) = &self.store else {
            return;
        };
        let stored = StoredEntry::from_entry(entry);
        let bytes = match serde_json::to_vec(&stored) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("could not serialize cache entry for {key}: {err}");
                return;
            }
        };
        if let Err(err) = store.set(key, bytes, entry.class.ttl()).await {
            warn!("durable write failed for {key}: {err}");
        }
    }
}
