//! Mean lunar nodes.
//!
//! Rahu is the mean ascending node of the lunar orbit; Ketu sits exactly
//! opposite. Both regress along the ecliptic at the mean nodal rate, so
//! they are always flagged retrograde. The nodes are geometric points:
//! latitude is zero by construction and the reported distance is the
//! nominal Earth-Moon distance.

use crate::body::Body;
use crate::normalize_360;

/// Mean nodal regression, degrees per day.
const NODE_RATE_DEG_PER_DAY: f64 = -1_934.136_289_1 / 36_525.0;

/// Nominal Earth-Moon distance in AU, reported for both nodes.
const NODE_DISTANCE_AU: f64 = 0.002_57;

/// Mean longitude of the ascending node in degrees, unnormalized.
fn mean_node_deg(t: f64) -> f64 {
    125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t * t
}

/// Ecliptic coordinates of Rahu or Ketu at `t` Julian centuries:
/// `(longitude, latitude, distance_au, speed, retrograde)`.
///
/// Callers route only `Rahu` and `Ketu` here; any other body takes the
/// ascending-node longitude.
pub fn ecliptic(body: Body, t: f64) -> (f64, f64, f64, f64, bool) {
    let mut lon = mean_node_deg(t);
    if body == Body::Ketu {
        lon += 180.0;
    }
    (normalize_360(lon), 0.0, NODE_DISTANCE_AU, NODE_RATE_DEG_PER_DAY, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_at_j2000() {
        let (lon, lat, _, speed, retro) = ecliptic(Body::Rahu, 0.0);
        assert!((lon - 125.044_547_9).abs() < 1e-9);
        assert_eq!(lat, 0.0);
        assert!(speed < 0.0);
        assert!(retro);
    }

    #[test]
    fn ketu_opposes_rahu() {
        for k in 0..20 {
            let t = k as f64 * 0.013;
            let rahu = ecliptic(Body::Rahu, t).0;
            let ketu = ecliptic(Body::Ketu, t).0;
            let gap = (ketu - rahu).rem_euclid(360.0);
            assert!((gap - 180.0).abs() < 1e-9, "gap = {gap}");
        }
    }

    #[test]
    fn node_regresses() {
        let day = 1.0 / 36_525.0;
        let before = ecliptic(Body::Rahu, 0.0).0;
        let after = ecliptic(Body::Rahu, day).0;
        let mut delta = (after - before).rem_euclid(360.0);
        if delta > 180.0 {
            delta -= 360.0;
        }
        assert!((delta - NODE_RATE_DEG_PER_DAY).abs() < 1e-6);
    }

    #[test]
    fn full_nodal_cycle_about_18_6_years() {
        // 360° / |rate| ≈ 6798 days.
        let period_days = 360.0 / NODE_RATE_DEG_PER_DAY.abs();
        assert!((period_days - 6_798.0).abs() < 5.0);
    }
}
