//! Geocentric positions of the five classical planets.
//!
//! Heliocentric longitude is a mean longitude plus a two-term equation of
//! center from the orbital eccentricity; the geocentric reduction subtracts
//! the Earth's own heliocentric vector from a fixed mean-longitude model of
//! the Earth. Latitude comes from the small-inclination approximation
//! projected onto the geocentric vector.
//!
//! Reported speed is the body's constant mean rate — an explicit
//! approximation, not a derivative. Retrograde status is the sign of the
//! centered short-interval rate of the geocentric longitude (±0.5 day).

use crate::body::Body;
use crate::error::EngineError;
use crate::normalize_360;

/// Mean orbital elements at J2000 (degrees, AU; rates per Julian century).
struct Elements {
    /// Mean longitude at J2000.
    l0: f64,
    /// Mean longitude rate, degrees per century.
    l_rate: f64,
    /// Longitude of perihelion.
    perihelion: f64,
    /// Orbital eccentricity.
    ecc: f64,
    /// Semi-major axis in AU.
    a: f64,
    /// Inclination to the ecliptic.
    inc: f64,
    /// Longitude of the ascending node.
    node: f64,
}

const MERCURY: Elements = Elements {
    l0: 252.250_906,
    l_rate: 149_472.674_635_8,
    perihelion: 77.456_119,
    ecc: 0.205_631_75,
    a: 0.387_098_31,
    inc: 7.004_986,
    node: 48.330_893,
};

const VENUS: Elements = Elements {
    l0: 181.979_801,
    l_rate: 58_519.213_030_2,
    perihelion: 131.563_703,
    ecc: 0.006_771_92,
    a: 0.723_329_82,
    inc: 3.394_662,
    node: 76.679_920,
};

const MARS: Elements = Elements {
    l0: 355.433,
    l_rate: 19_141.696_447_1,
    perihelion: 336.060_234,
    ecc: 0.093_400_65,
    a: 1.523_679_34,
    inc: 1.849_726,
    node: 49.558_093,
};

const JUPITER: Elements = Elements {
    l0: 34.351_519,
    l_rate: 3_036.302_774_8,
    perihelion: 14.331_207,
    ecc: 0.048_497_93,
    a: 5.202_603_19,
    inc: 1.303_270,
    node: 100.464_441,
};

const SATURN: Elements = Elements {
    l0: 50.077_444,
    l_rate: 1_223.511_068_6,
    perihelion: 93.057_237,
    ecc: 0.055_548_14,
    a: 9.554_909_60,
    inc: 2.488_878,
    node: 113.665_524,
};

/// Earth mean-longitude model for the geocentric reduction.
const EARTH: Elements = Elements {
    l0: 100.466_457,
    l_rate: 36_000.769_827_8,
    perihelion: 102.937_348,
    ecc: 0.016_708_62,
    a: 1.000_001_02,
    inc: 0.0,
    node: 0.0,
};

fn elements(body: Body) -> Result<&'static Elements, EngineError> {
    match body {
        Body::Mercury => Ok(&MERCURY),
        Body::Venus => Ok(&VENUS),
        Body::Mars => Ok(&MARS),
        Body::Jupiter => Ok(&JUPITER),
        Body::Saturn => Ok(&SATURN),
        _ => Err(EngineError::Internal("not a classical planet")),
    }
}

/// Heliocentric `(longitude_deg, latitude_deg, radius_au)` from mean
/// elements: mean longitude + two-term equation of center, radius from the
/// conic equation, latitude from the small-inclination approximation.
fn heliocentric(el: &Elements, t: f64) -> (f64, f64, f64) {
    let l = el.l0 + el.l_rate * t;
    let m = (l - el.perihelion).to_radians();

    let e = el.ecc;
    let c_rad = (2.0 * e - e * e * e / 4.0) * m.sin() + 1.25 * e * e * (2.0 * m).sin();
    let true_anomaly = m + c_rad;
    let lon = normalize_360(l + c_rad.to_degrees());

    let r = el.a * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());
    let lat = el.inc * (lon - el.node).to_radians().sin();

    (lon, lat, r)
}

/// Geocentric `(longitude_deg, latitude_deg, distance_au)` at `t`.
fn geocentric(el: &Elements, t: f64) -> (f64, f64, f64) {
    let (pl, pb, pr) = heliocentric(el, t);
    let (el_lon, _, er) = heliocentric(&EARTH, t);

    let (pl_rad, pb_rad, el_rad) = (pl.to_radians(), pb.to_radians(), el_lon.to_radians());
    let x = pr * pb_rad.cos() * pl_rad.cos() - er * el_rad.cos();
    let y = pr * pb_rad.cos() * pl_rad.sin() - er * el_rad.sin();
    let z = pr * pb_rad.sin();

    let lon = normalize_360(y.atan2(x).to_degrees());
    let lat = z.atan2(x.hypot(y)).to_degrees();
    let dist = (x * x + y * y + z * z).sqrt();

    (lon, lat, dist)
}

/// Mean reported rate in degrees per day.
///
/// Inner planets track the Sun over a synodic cycle, so they carry the
/// solar mean rate; outer planets carry their sidereal mean motion.
fn mean_rate_deg_per_day(body: Body, el: &Elements) -> f64 {
    match body {
        Body::Mercury | Body::Venus => 0.985_6,
        _ => el.l_rate / 36_525.0,
    }
}

/// Geocentric ecliptic coordinates of a classical planet at `t` Julian
/// centuries: `(longitude, latitude, distance_au, speed, retrograde)`.
pub fn ecliptic(body: Body, t: f64) -> Result<(f64, f64, f64, f64, bool), EngineError> {
    let el = elements(body)?;
    let (lon, lat, dist) = geocentric(el, t);
    let speed = mean_rate_deg_per_day(body, el);
    let retro = is_retrograde(el, t);
    Ok((lon, lat, dist, speed, retro))
}

/// Centered difference of geocentric longitude over ±0.5 day.
fn is_retrograde(el: &Elements, t: f64) -> bool {
    const HALF_DAY_CENTURIES: f64 = 0.5 / 36_525.0;
    let before = geocentric(el, t - HALF_DAY_CENTURIES).0;
    let after = geocentric(el, t + HALF_DAY_CENTURIES).0;
    // Signed shortest arc from before to after.
    let mut delta = (after - before) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    delta < 0.0
}
