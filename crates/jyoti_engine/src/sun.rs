//! Solar longitude, distance and analytic speed.
//!
//! Geometric mean longitude plus a three-term equation of center
//! (Meeus ch. 25, low-accuracy method). Good to roughly 0.01 degrees over
//! several centuries around J2000.

/// Geometric mean longitude of the Sun in degrees (not normalized).
pub(crate) fn mean_longitude_deg(t: f64) -> f64 {
    280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t
}

/// Mean anomaly of the Sun in degrees (not normalized).
pub(crate) fn mean_anomaly_deg(t: f64) -> f64 {
    357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t
}

/// Equation of center in degrees.
fn equation_of_center_deg(t: f64, m_rad: f64) -> f64 {
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin()
}

/// True geocentric ecliptic coordinates of the Sun at `t` Julian centuries.
///
/// Returns `(longitude_deg, latitude_deg, distance_au, speed_deg_per_day,
/// retrograde)`. Solar ecliptic latitude never exceeds ~1.2 arcseconds and
/// is taken as zero. The Sun is never retrograde.
pub fn ecliptic(t: f64) -> (f64, f64, f64, f64, bool) {
    let l0 = mean_longitude_deg(t);
    let m_deg = mean_anomaly_deg(t);
    let m = m_deg.to_radians();

    let c = equation_of_center_deg(t, m);
    let longitude = l0 + c;

    // Radius vector from the same eccentricity truncation.
    let distance = 1.000_140 - 0.016_708 * m.cos() - 0.000_139 * (2.0 * m).cos();

    let speed = speed_deg_per_day(t, m);

    (longitude, 0.0, distance, speed, false)
}

/// Analytic dλ/dt in degrees per day: term-by-term derivative of the
/// mean longitude and equation of center.
fn speed_deg_per_day(t: f64, m_rad: f64) -> f64 {
    let dl0 = 36_000.769_83 + 2.0 * 0.000_303_2 * t;
    let dm = (35_999.050_29 - 2.0 * 0.000_153_7 * t).to_radians();

    // d/dT of each equation-of-center term; amplitudes in degrees, so the
    // chain factor dM/dT stays in radians.
    let dc = (-0.004_817 - 2.0 * 0.000_014 * t) * m_rad.sin()
        + (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.cos() * dm
        + (-0.000_101) * (2.0 * m_rad).sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).cos() * 2.0 * dm
        + 0.000_289 * (3.0 * m_rad).cos() * 3.0 * dm;

    (dl0 + dc) / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize_360;
    use jyoti_time::{calendar_to_jd, jd_to_centuries};

    #[test]
    fn meeus_example_1992() {
        // Meeus example 25.a: 1992 Oct 13.0, true longitude 199.90988°.
        let t = jd_to_centuries(calendar_to_jd(1992, 10, 13.0));
        let (lon, lat, dist, _, retro) = ecliptic(t);
        let lon = normalize_360(lon);
        assert!((lon - 199.909_88).abs() < 0.01, "lon = {lon}");
        assert_eq!(lat, 0.0);
        // R = 0.99766 AU in the example.
        assert!((dist - 0.997_66).abs() < 0.001, "dist = {dist}");
        assert!(!retro);
    }

    #[test]
    fn equinox_longitude_near_zero() {
        // 2024 Mar 20 ~03:06 UTC vernal equinox.
        let t = jd_to_centuries(calendar_to_jd(2024, 3, 20.13));
        let lon = normalize_360(ecliptic(t).0);
        let dist_to_zero = lon.min(360.0 - lon);
        assert!(dist_to_zero < 0.5, "lon at equinox = {lon}");
    }

    #[test]
    fn speed_near_mean_motion() {
        // Daily motion oscillates between ~0.9532 and ~1.0120 deg/day.
        for k in 0..12 {
            let t = jd_to_centuries(2_451_545.0 + k as f64 * 30.0);
            let speed = ecliptic(t).3;
            assert!(
                (0.94..1.03).contains(&speed),
                "speed = {speed} deg/day at t = {t}"
            );
        }
    }

    #[test]
    fn speed_matches_finite_difference() {
        let jd = calendar_to_jd(2010, 5, 17.0);
        let h = 0.01; // days
        let lon = |jd: f64| normalize_360(ecliptic(jd_to_centuries(jd)).0);
        let numeric = (lon(jd + h) - lon(jd - h)).rem_euclid(360.0) / (2.0 * h);
        let analytic = ecliptic(jd_to_centuries(jd)).3;
        assert!(
            (numeric - analytic).abs() < 1e-4,
            "numeric {numeric} vs analytic {analytic}"
        );
    }

    #[test]
    fn distance_bounds() {
        // Perihelion ~0.9833, aphelion ~1.0167 AU.
        for k in 0..24 {
            let t = jd_to_centuries(2_451_545.0 + k as f64 * 15.2);
            let dist = ecliptic(t).2;
            assert!((0.98..1.02).contains(&dist), "dist = {dist}");
        }
    }
}
