//! Mean obliquity of the ecliptic.
//!
//! IAU 1980 cubic polynomial (Meeus eq. 22.2). Nutation in obliquity is
//! omitted; the mean value is what the equatorial rotation and the house
//! engine share.

use crate::julian::jd_to_centuries;

/// Mean obliquity at J2000.0: 23°26′21.448″.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111_111;

/// Mean obliquity of the ecliptic in degrees at a Julian Date.
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    OBLIQUITY_J2000_DEG - (46.8150 * t + 0.000_59 * t * t - 0.001_813 * t * t * t) / 3600.0
}

/// Mean obliquity of the ecliptic in radians at a Julian Date.
pub fn mean_obliquity_rad(jd: f64) -> f64 {
    mean_obliquity_deg(jd).to_radians()
}
