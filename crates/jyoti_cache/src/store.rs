//! Durable key-value backend seam.
//!
//! The tiered cache talks to persistence through `KeyValueStore`, a small
//! async byte-oriented contract. The in-memory implementation here backs
//! tests and store-less deployments; a real deployment plugs in whatever
//! durable medium it has.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::TimeDelta;
use tokio::sync::Mutex;

use crate::error::CacheError;

/// Async byte store. Implementations must be safe to share across tasks.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the bytes stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store `bytes` under `key`. `ttl` is a retention hint; backends with
    /// native expiry may honor it, others may ignore it since the payload
    /// carries its own expiry.
    async fn set(&self, key: &str, bytes: Vec<u8>, ttl: TimeDelta) -> Result<(), CacheError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), CacheError>;
}

/// Heap-backed store for tests and single-process use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, bytes: Vec<u8>, _ttl: TimeDelta) -> Result<(), CacheError> {
        self.entries.lock().await.insert(key.to_owned(), bytes);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove_round_trip() {
        let store = MemoryStore::new();
        store
            .set("k", b"payload".to_vec(), TimeDelta::days(1))
            .await
            .unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(b"payload".to_vec()));
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn removing_absent_key_is_ok() {
        let store = MemoryStore::new();
        store.remove("missing").await.unwrap();
    }
}
