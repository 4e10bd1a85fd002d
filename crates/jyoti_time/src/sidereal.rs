//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! GMST uses the IAU 1982 polynomial (Meeus ch. 12, eq. 12.4). The engine
//! carries no leap-second or Earth-orientation data, so the UT argument is
//! taken equal to UTC; the resulting error (under one second of time) is
//! well inside the series-truncation error of the position engine.

use std::f64::consts::TAU;

use crate::julian::jd_to_centuries;

/// Greenwich Mean Sidereal Time at a Julian Date (UT), in radians [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let gmst_deg = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - 2_451_545.0)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    gmst_deg.to_radians().rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and observer east longitude.
///
/// LST = GMST + longitude_east. Returns radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
