//! Lunar longitude, latitude, distance and analytic speed.
//!
//! Truncated ELP-style series (Meeus ch. 47): the principal elliptic term,
//! evection, variation, annual equation, parallactic equation and the next
//! largest longitude terms, four latitude terms and four distance terms.
//! Longitude is good to a few arcminutes, which downstream nakshatra and
//! dasha derivations tolerate comfortably.

/// Kilometres per astronomical unit.
const KM_PER_AU: f64 = 149_597_870.7;

/// Longitude series: (amplitude_deg, [coeff_D, coeff_M, coeff_Mp, coeff_F]).
///
/// Named classical terms, in order: principal elliptic, evection, variation,
/// second elliptic, annual equation, reduction to the ecliptic, then the
/// remaining Meeus terms above 0.03 degrees including the parallactic
/// equation (−0.034720 sin D).
const LONGITUDE_TERMS: [(f64, [i8; 4]); 13] = [
    (6.288_774, [0, 0, 1, 0]),
    (1.274_027, [2, 0, -1, 0]),
    (0.658_314, [2, 0, 0, 0]),
    (0.213_618, [0, 0, 2, 0]),
    (-0.185_116, [0, 1, 0, 0]),
    (-0.114_332, [0, 0, 0, 2]),
    (0.058_793, [2, 0, -2, 0]),
    (0.057_066, [2, -1, -1, 0]),
    (0.053_322, [2, 0, 1, 0]),
    (0.045_758, [2, -1, 0, 0]),
    (-0.040_923, [0, 1, -1, 0]),
    (-0.034_720, [1, 0, 0, 0]),
    (-0.030_383, [0, 1, 1, 0]),
];

/// Latitude series: (amplitude_deg, [coeff_D, coeff_M, coeff_Mp, coeff_F]).
const LATITUDE_TERMS: [(f64, [i8; 4]); 4] = [
    (5.128_122, [0, 0, 0, 1]),
    (0.280_602, [0, 0, 1, 1]),
    (0.277_693, [0, 0, 1, -1]),
    (0.173_237, [2, 0, 0, -1]),
];

/// Distance series in km: (amplitude_km, [coeff_D, coeff_M, coeff_Mp, coeff_F]).
const DISTANCE_TERMS: [(f64, [i8; 4]); 4] = [
    (-20_905.355, [0, 0, 1, 0]),
    (-3_699.111, [2, 0, -1, 0]),
    (-2_955.968, [2, 0, 0, 0]),
    (-569.925, [0, 0, 2, 0]),
];

/// Fundamental arguments in degrees at `t` Julian centuries:
/// `(L', D, M, M', F)` — mean longitude, mean elongation, solar mean
/// anomaly, lunar mean anomaly, argument of latitude.
pub(crate) fn fundamental_arguments_deg(t: f64) -> (f64, f64, f64, f64, f64) {
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t;
    (lp, d, m, mp, f)
}

/// Per-century rates of (L', D, M, M', F) in degrees, first order.
const ARG_RATES: [f64; 5] = [
    481_267.881_234_21,
    445_267.111_403_4,
    35_999.050_290_9,
    477_198.867_505_5,
    483_202.017_523_3,
];

fn argument_rad(args: &(f64, f64, f64, f64, f64), c: &[i8; 4]) -> f64 {
    (c[0] as f64 * args.1 + c[1] as f64 * args.2 + c[2] as f64 * args.3 + c[3] as f64 * args.4)
        .to_radians()
}

/// Geocentric ecliptic coordinates of the Moon at `t` Julian centuries.
///
/// Returns `(longitude_deg, latitude_deg, distance_au, speed_deg_per_day,
/// retrograde)`. The Moon is never retrograde.
pub fn ecliptic(t: f64) -> (f64, f64, f64, f64, bool) {
    let args = fundamental_arguments_deg(t);

    let mut longitude = args.0;
    for &(amp, ref c) in &LONGITUDE_TERMS {
        longitude += amp * argument_rad(&args, c).sin();
    }

    let mut latitude = 0.0;
    for &(amp, ref c) in &LATITUDE_TERMS {
        latitude += amp * argument_rad(&args, c).sin();
    }

    let mut distance_km = 385_000.56;
    for &(amp, ref c) in &DISTANCE_TERMS {
        distance_km += amp * argument_rad(&args, c).cos();
    }

    let speed = speed_deg_per_day(&args);

    (longitude, latitude, distance_km / KM_PER_AU, speed, false)
}

/// Analytic dλ/dt in degrees per day.
///
/// Each series term `A sin(c·args)` differentiates to
/// `A cos(c·args) · d(c·args)/dT`, with the argument rate assembled from the
/// first-order rates of D, M, M', F.
fn speed_deg_per_day(args: &(f64, f64, f64, f64, f64)) -> f64 {
    let mut rate_per_century = ARG_RATES[0];
    for &(amp, ref c) in &LONGITUDE_TERMS {
        let arg_rate_deg = c[0] as f64 * ARG_RATES[1]
            + c[1] as f64 * ARG_RATES[2]
            + c[2] as f64 * ARG_RATES[3]
            + c[3] as f64 * ARG_RATES[4];
        rate_per_century += amp * argument_rad(args, c).cos() * arg_rate_deg.to_radians();
    }
    rate_per_century / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize_360;
    use jyoti_time::{calendar_to_jd, jd_to_centuries};

    #[test]
    fn meeus_example_1992() {
        // Meeus example 47.a: 1992 Apr 12.0 TD:
        // λ = 133.162655°, β = -3.229126°, Δ = 368409.7 km.
        let t = jd_to_centuries(calendar_to_jd(1992, 4, 12.0));
        let (lon, lat, dist, _, retro) = ecliptic(t);
        let lon = normalize_360(lon);
        assert!((lon - 133.162_655).abs() < 0.2, "lon = {lon}");
        assert!((lat - (-3.229_126)).abs() < 0.15, "lat = {lat}");
        assert!(
            (dist - 368_409.7 / KM_PER_AU).abs() < 1.5e-5,
            "dist = {dist} AU"
        );
        assert!(!retro);
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        // Max ecliptic latitude ~5.3°.
        for k in 0..60 {
            let t = jd_to_centuries(2_451_545.0 + k as f64 * 2.3);
            let lat = ecliptic(t).1;
            assert!(lat.abs() < 5.6, "lat = {lat}");
        }
    }

    #[test]
    fn distance_bounds() {
        // Perigee ~356 500 km, apogee ~406 700 km.
        for k in 0..60 {
            let t = jd_to_centuries(2_451_545.0 + k as f64 * 1.7);
            let dist_km = ecliptic(t).2 * KM_PER_AU;
            assert!(
                (350_000.0..412_000.0).contains(&dist_km),
                "dist = {dist_km} km"
            );
        }
    }

    #[test]
    fn speed_within_lunar_range() {
        // Daily motion varies between ~11.8 and ~15.4 deg/day.
        for k in 0..30 {
            let t = jd_to_centuries(2_451_545.0 + k as f64 * 1.0);
            let speed = ecliptic(t).3;
            assert!((11.0..16.0).contains(&speed), "speed = {speed}");
        }
    }

    #[test]
    fn speed_matches_finite_difference() {
        let jd = calendar_to_jd(2005, 9, 3.0);
        let h = 0.005;
        let lon = |jd: f64| normalize_360(ecliptic(jd_to_centuries(jd)).0);
        let numeric = (lon(jd + h) - lon(jd - h)).rem_euclid(360.0) / (2.0 * h);
        let analytic = ecliptic(jd_to_centuries(jd)).3;
        assert!(
            (numeric - analytic).abs() < 1e-3,
            "numeric {numeric} vs analytic {analytic}"
        );
    }
}
