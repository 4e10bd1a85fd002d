//! Self-contained geocentric position engine.
//!
//! Every body's tropical ecliptic longitude is a mean-longitude term plus a
//! short fixed series of periodic corrections: multi-term series for Sun and
//! Moon (evection, variation, annual and parallactic equations), a two-term
//! equation of center with geocentric reduction for the five classical
//! planets, and a retrograde mean-motion point for the lunar nodes.
//!
//! The engine is a deliberate approximation — it trades arcsecond accuracy
//! for zero external data files — and is hidden behind the
//! [`PositionProvider`] trait so a higher-fidelity ephemeris can be swapped
//! in without touching any downstream crate.

pub mod body;
pub mod equatorial;
pub mod error;
pub mod moon;
pub mod nodes;
pub mod planets;
pub mod provider;
pub mod sun;
pub mod types;

pub use body::{ALL_BODIES, Body};
pub use error::EngineError;
pub use provider::{PositionProvider, SeriesProvider};
pub use types::BodyPosition;

use jyoti_time::jd_to_centuries;

/// Normalize an angle to [0, 360) degrees.
pub(crate) fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Compute the geocentric position of a body at a Julian Date (UTC).
///
/// Pure and deterministic: the same `(body, jd)` always yields the same
/// record, which is what makes results safe to memoize.
pub fn position(body: Body, jd: f64) -> Result<BodyPosition, EngineError> {
    if !jd.is_finite() {
        return Err(EngineError::NonFiniteEpoch);
    }
    let t = jd_to_centuries(jd);

    let (longitude, latitude, distance_au, speed, retrograde) = match body {
        Body::Sun => sun::ecliptic(t),
        Body::Moon => moon::ecliptic(t),
        Body::Rahu | Body::Ketu => nodes::ecliptic(body, t),
        _ => planets::ecliptic(body, t)?,
    };

    let longitude = normalize_360(longitude);
    let (declination, right_ascension) = equatorial::from_ecliptic(longitude, latitude, jd);

    Ok(BodyPosition {
        body,
        longitude_deg: longitude,
        latitude_deg: latitude,
        distance_au,
        speed_deg_per_day: speed,
        retrograde,
        declination_deg: declination,
        right_ascension_deg: right_ascension,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyoti_time::calendar_to_jd;

    #[test]
    fn rejects_non_finite_epoch() {
        assert!(matches!(
            position(Body::Sun, f64::NAN),
            Err(EngineError::NonFiniteEpoch)
        ));
        assert!(matches!(
            position(Body::Moon, f64::INFINITY),
            Err(EngineError::NonFiniteEpoch)
        ));
    }

    #[test]
    fn all_longitudes_normalized() {
        let jds = [
            calendar_to_jd(1950, 6, 1.0),
            calendar_to_jd(2000, 1, 1.5),
            calendar_to_jd(2024, 3, 20.0),
            calendar_to_jd(2080, 12, 31.0),
        ];
        for &jd in &jds {
            for &body in Body::all() {
                let pos = position(body, jd).unwrap();
                assert!(
                    (0.0..360.0).contains(&pos.longitude_deg),
                    "{body:?} at {jd}: longitude {}",
                    pos.longitude_deg
                );
            }
        }
    }

    #[test]
    fn deterministic() {
        let jd = calendar_to_jd(2024, 3, 20.0);
        for &body in Body::all() {
            let a = position(body, jd).unwrap();
            let b = position(body, jd).unwrap();
            assert_eq!(a, b, "{body:?} not deterministic");
        }
    }

    #[test]
    fn luminaries_never_retrograde() {
        for day in 0..36 {
            let jd = 2_451_545.0 + day as f64 * 100.0;
            assert!(!position(Body::Sun, jd).unwrap().retrograde);
            assert!(!position(Body::Moon, jd).unwrap().retrograde);
        }
    }

    #[test]
    fn nodes_always_retrograde() {
        for day in 0..36 {
            let jd = 2_451_545.0 + day as f64 * 100.0;
            assert!(position(Body::Rahu, jd).unwrap().retrograde);
            assert!(position(Body::Ketu, jd).unwrap().retrograde);
        }
    }
}
