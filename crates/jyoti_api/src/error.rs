//! Service-layer error taxonomy.
//!
//! Validation failures are rejected at the boundary before any computation
//! runs; computation errors from the lower crates pass through unchanged.

use thiserror::Error;

use jyoti_engine::EngineError;
use jyoti_time::TimeError;
use jyoti_vedic::VedicError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request failed boundary validation; nothing was computed.
    #[error("invalid request: {0}")]
    Validation(String),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Vedic(#[from] VedicError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_error_converts() {
        let err: ApiError = EngineError::NonFiniteEpoch.into();
        assert!(matches!(err, ApiError::Engine(_)));
    }

    #[test]
    fn validation_carries_its_message() {
        let err = ApiError::Validation("latitude 99 out of range".into());
        assert!(err.to_string().contains("latitude 99"));
    }
}
