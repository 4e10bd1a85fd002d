//! Ecliptic to equatorial conversion.
//!
//! Rotates ecliptic coordinates about the mean obliquity of date to produce
//! right ascension and declination. Only the mean obliquity enters; nutation
//! is outside the series truncation carried by this engine.

use jyoti_time::mean_obliquity_rad;

use crate::normalize_360;

/// Converts ecliptic `(longitude, latitude)` in degrees at `jd` to
/// `(declination_deg, right_ascension_deg)`, right ascension in [0, 360).
pub fn from_ecliptic(lon_deg: f64, lat_deg: f64, jd: f64) -> (f64, f64) {
    let eps = mean_obliquity_rad(jd);
    let (lon, lat) = (lon_deg.to_radians(), lat_deg.to_radians());

    let sin_dec = lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin();
    let dec = sin_dec.asin().to_degrees();

    let ra_y = lon.sin() * eps.cos() - lat.tan() * eps.sin();
    let ra = normalize_360(ra_y.atan2(lon.cos()).to_degrees());

    (dec, ra)
}

#[cfg(test)]
mod tests {
    use super::*;

    const J2000_JD: f64 = 2_451_545.0;

    #[test]
    fn equinox_point_maps_to_zero() {
        let (dec, ra) = from_ecliptic(0.0, 0.0, J2000_JD);
        assert!(dec.abs() < 1e-9);
        assert!(ra.abs() < 1e-9 || (ra - 360.0).abs() < 1e-9);
    }

    #[test]
    fn summer_solstice_point_at_max_declination() {
        // λ = 90°, β = 0 lands at δ = ε, α = 90°.
        let (dec, ra) = from_ecliptic(90.0, 0.0, J2000_JD);
        let eps = mean_obliquity_rad(J2000_JD).to_degrees();
        assert!((dec - eps).abs() < 1e-9);
        assert!((ra - 90.0).abs() < 1e-9);
    }

    #[test]
    fn pollux_example() {
        // Meeus example 13.a run in reverse: λ = 113.215630°,
        // β = 6.684170° gives α ≈ 116.328942°, δ ≈ +28.026183°.
        let (dec, ra) = from_ecliptic(113.215_630, 6.684_170, J2000_JD);
        assert!((ra - 116.328_942).abs() < 0.01, "ra = {ra}");
        assert!((dec - 28.026_183).abs() < 0.01, "dec = {dec}");
    }

    #[test]
    fn declination_bounded_by_obliquity_plus_latitude() {
        for k in 0..72 {
            let lon = k as f64 * 5.0;
            let (dec, ra) = from_ecliptic(lon, 5.0, J2000_JD);
            assert!(dec.abs() < 23.45 + 5.0 + 0.01);
            assert!((0.0..360.0).contains(&ra));
        }
    }
}
