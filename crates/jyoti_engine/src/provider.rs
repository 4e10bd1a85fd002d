//! Position provider seam.
//!
//! Downstream crates consume positions through [`PositionProvider`] rather
//! than calling the series directly, so a higher-fidelity ephemeris (or a
//! canned test double) can replace the built-in series without touching the
//! vedic or API layers.

use crate::body::Body;
use crate::error::EngineError;
use crate::types::BodyPosition;

/// Source of geocentric body positions at a Julian Date (UTC).
///
/// Implementations must be pure with respect to `(body, jd_utc)`: repeated
/// calls with the same arguments return the same record.
pub trait PositionProvider: Send + Sync {
    fn position(&self, body: Body, jd_utc: f64) -> Result<BodyPosition, EngineError>;
}

/// The built-in truncated-series engine as a provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesProvider;

impl PositionProvider for SeriesProvider {
    fn position(&self, body: Body, jd_utc: f64) -> Result<BodyPosition, EngineError> {
        crate::position(body, jd_utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_provider_matches_free_function() {
        let jd = 2_460_000.5;
        let provider = SeriesProvider;
        for &body in Body::all() {
            let via_trait = provider.position(body, jd).unwrap();
            let direct = crate::position(body, jd).unwrap();
            assert_eq!(via_trait, direct);
        }
    }

    #[test]
    fn provider_is_object_safe() {
        let provider: Box<dyn PositionProvider> = Box::new(SeriesProvider);
        assert!(provider.position(Body::Moon, 2_451_545.0).is_ok());
    }
}
