//! Cache-layer error type.
//!
//! These errors circulate between the memoizer and its durable store; the
//! memoizer absorbs every one of them (logged, never surfaced), so callers
//! of `get_or_compute` only ever see their own compute error type.

use thiserror::Error;

/// Failures inside the cache layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CacheError {
    /// The durable store rejected or failed an operation.
    #[error("durable store failure: {0}")]
    Store(String),

    /// A payload could not be serialized or deserialized.
    #[error("payload serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}
