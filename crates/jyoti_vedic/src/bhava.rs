//! Bhava (house) cusp computation.
//!
//! Local sidereal time and the obliquity of the ecliptic are computed once
//! per call and shared by every system. The ascendant and midheaven follow
//! from the standard spherical astronomy formulas; the closed-form systems
//! add fixed 30-degree steps, while the two quadrant systems solve each
//! intermediate cusp from semi-arc geometry.
//!
//! Placidus trisects each cusp degree's own diurnal or nocturnal semi-arc,
//! a fixed point solved by iteration from the equal-division guess. Koch
//! trisects the rising interval of the MC degree, which needs only the MC's
//! ascensional difference and the ascendant formula at shifted sidereal
//! times.

use jyoti_time::{gmst_rad, local_sidereal_time_rad, mean_obliquity_rad};

use crate::bhava_types::{AscMc, HouseCusps, HouseSystem};
use crate::error::VedicError;
use crate::util::{arc_delta, normalize_360};

/// Quadrant systems degenerate near the polar circles where the semi-arc
/// geometry has no solution for every ecliptic degree.
pub const MAX_QUADRANT_LATITUDE_DEG: f64 = 66.5;

/// Iteration threshold for quadrant cusps, degrees.
const CONVERGENCE_DEG: f64 = 1e-7;

/// Iteration cap; past it the last estimate is accepted.
const MAX_ITERATIONS: usize = 100;

fn validate_location(lat_deg: f64, lon_east_deg: f64) -> Result<(), VedicError> {
    if !lat_deg.is_finite() || !(-90.0..=90.0).contains(&lat_deg) {
        return Err(VedicError::InvalidLocation("latitude outside [-90, 90]"));
    }
    if !lon_east_deg.is_finite() || !(-180.0..=180.0).contains(&lon_east_deg) {
        return Err(VedicError::InvalidLocation("longitude outside [-180, 180]"));
    }
    Ok(())
}

/// Ecliptic longitude of the ascendant in degrees for a given local
/// sidereal time (radians), obliquity and latitude (radians).
///
/// `Asc = atan2(cos(LST), -(sin(LST) cos(eps) + tan(phi) sin(eps)))`
fn ascendant_deg(lst_rad: f64, eps_rad: f64, lat_rad: f64) -> f64 {
    let asc = f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * eps_rad.cos() + lat_rad.tan() * eps_rad.sin()),
    );
    normalize_360(asc.to_degrees())
}

/// Ecliptic longitude of the midheaven in degrees.
///
/// `MC = atan2(sin(LST), cos(LST) cos(eps))`
fn midheaven_deg(lst_rad: f64, eps_rad: f64) -> f64 {
    let mc = f64::atan2(lst_rad.sin(), lst_rad.cos() * eps_rad.cos());
    normalize_360(mc.to_degrees())
}

/// Ecliptic longitude (degrees) of the ecliptic point with a given right
/// ascension (degrees): `tan(lambda) = tan(RA) / cos(eps)`.
fn ecliptic_lon_from_ra(ra_deg: f64, eps_rad: f64) -> f64 {
    let ra = ra_deg.to_radians();
    normalize_360(f64::atan2(ra.sin(), ra.cos() * eps_rad.cos()).to_degrees())
}

/// Declination (radians) of the ecliptic point at longitude `lon_deg`.
fn ecliptic_declination_rad(lon_deg: f64, eps_rad: f64) -> f64 {
    (eps_rad.sin() * lon_deg.to_radians().sin()).asin()
}

/// Ascendant and midheaven at a Julian Date (UTC) and location.
pub fn asc_mc(jd_utc: f64, lat_deg: f64, lon_east_deg: f64) -> Result<AscMc, VedicError> {
    if !jd_utc.is_finite() {
        return Err(VedicError::InvalidInput("julian day not finite"));
    }
    validate_location(lat_deg, lon_east_deg)?;

    let lst = local_sidereal_time_rad(gmst_rad(jd_utc), lon_east_deg.to_radians());
    let eps = mean_obliquity_rad(jd_utc);
    Ok(AscMc {
        ascendant_deg: ascendant_deg(lst, eps, lat_deg.to_radians()),
        midheaven_deg: midheaven_deg(lst, eps),
    })
}

/// One Placidus intermediate cusp.
///
/// Fixed point in ecliptic longitude: the cusp's meridian distance is a
/// fixed fraction of its own semi-arc. `fraction` is measured from the MC
/// along the diurnal arc, or from the IC along the nocturnal arc.
fn placidus_cusp(
    ramc_deg: f64,
    fraction: f64,
    diurnal: bool,
    lat_rad: f64,
    eps_rad: f64,
) -> f64 {
    let target_ra = |lon_deg: f64| {
        let dec = ecliptic_declination_rad(lon_deg, eps_rad);
        let x = lat_rad.tan() * dec.tan();
        if diurnal {
            // Diurnal semi-arc: acos(-tan(phi) tan(dec))
            let sa = (-x).clamp(-1.0, 1.0).acos().to_degrees();
            ramc_deg + fraction * sa
        } else {
            // Nocturnal semi-arc, measured back from the IC.
            let sn = x.clamp(-1.0, 1.0).acos().to_degrees();
            ramc_deg + 180.0 - fraction * sn
        }
    };

    // Equal-division guess: semi-arc of 90 degrees.
    let guess_ra = if diurnal {
        ramc_deg + fraction * 90.0
    } else {
        ramc_deg + 180.0 - fraction * 90.0
    };
    let mut lon = ecliptic_lon_from_ra(guess_ra, eps_rad);

    for _ in 0..MAX_ITERATIONS {
        let next = ecliptic_lon_from_ra(target_ra(lon), eps_rad);
        let step = arc_delta(lon, next);
        lon = next;
        if step.abs() < CONVERGENCE_DEG {
            break;
        }
    }
    lon
}

/// The four Placidus intermediate cusps `(11, 12, 2, 3)`.
fn placidus_intermediates(ramc_deg: f64, lat_rad: f64, eps_rad: f64) -> [f64; 4] {
    [
        placidus_cusp(ramc_deg, 1.0 / 3.0, true, lat_rad, eps_rad),
        placidus_cusp(ramc_deg, 2.0 / 3.0, true, lat_rad, eps_rad),
        placidus_cusp(ramc_deg, 2.0 / 3.0, false, lat_rad, eps_rad),
        placidus_cusp(ramc_deg, 1.0 / 3.0, false, lat_rad, eps_rad),
    ]
}

/// The four Koch intermediate cusps `(11, 12, 2, 3)`.
///
/// The MC degree rises `90 + AD(MC)` of sidereal time before it culminates
/// and the ascendant rises now; Koch trisects those rising intervals and
/// takes the degree ascending at each trisection time.
fn koch_intermediates(ramc_deg: f64, mc_deg: f64, lat_rad: f64, eps_rad: f64) -> [f64; 4] {
    let dec_mc = ecliptic_declination_rad(mc_deg, eps_rad);
    let ad = (lat_rad.tan() * dec_mc.tan())
        .clamp(-1.0, 1.0)
        .asin()
        .to_degrees();

    let asc_at = |theta_deg: f64| {
        ascendant_deg(normalize_360(theta_deg).to_radians(), eps_rad, lat_rad)
    };
    [
        asc_at(ramc_deg - 60.0 - 2.0 * ad / 3.0),
        asc_at(ramc_deg - 30.0 - ad / 3.0),
        asc_at(ramc_deg + 30.0 - ad / 3.0),
        asc_at(ramc_deg + 60.0 - 2.0 * ad / 3.0),
    ]
}

/// Twelve house cusps at a Julian Date (UTC) and location.
///
/// All 12 returned cusps lie in [0, 360) and step monotonically around the
/// wheel modulo the wrap at 360.
pub fn house_cusps(
    jd_utc: f64,
    lat_deg: f64,
    lon_east_deg: f64,
    system: HouseSystem,
) -> Result<HouseCusps, VedicError> {
    if !jd_utc.is_finite() {
        return Err(VedicError::InvalidInput("julian day not finite"));
    }
    validate_location(lat_deg, lon_east_deg)?;
    if system.is_quadrant() && lat_deg.abs() > MAX_QUADRANT_LATITUDE_DEG {
        return Err(VedicError::InvalidLocation(
            "quadrant house systems are undefined beyond the polar circles",
        ));
    }

    let lst = local_sidereal_time_rad(gmst_rad(jd_utc), lon_east_deg.to_radians());
    let eps = mean_obliquity_rad(jd_utc);
    let lat_rad = lat_deg.to_radians();

    let asc = ascendant_deg(lst, eps, lat_rad);
    let mc = midheaven_deg(lst, eps);

    let mut cusps = [0.0_f64; 12];
    match system {
        HouseSystem::Equal => fill_thirty_degree_wheel(&mut cusps, asc),
        HouseSystem::WholeSign => {
            fill_thirty_degree_wheel(&mut cusps, (asc / 30.0).floor() * 30.0)
        }
        HouseSystem::Vehlow => fill_thirty_degree_wheel(&mut cusps, asc - 15.0),
        HouseSystem::Placidus | HouseSystem::Koch => {
            let ramc_deg = lst.to_degrees();
            let [c11, c12, c2, c3] = if system == HouseSystem::Placidus {
                placidus_intermediates(ramc_deg, lat_rad, eps)
            } else {
                koch_intermediates(ramc_deg, mc, lat_rad, eps)
            };
            cusps[0] = asc;
            cusps[1] = c2;
            cusps[2] = c3;
            cusps[3] = normalize_360(mc + 180.0);
            cusps[4] = normalize_360(c11 + 180.0);
            cusps[5] = normalize_360(c12 + 180.0);
            cusps[6] = normalize_360(asc + 180.0);
            cusps[7] = normalize_360(c2 + 180.0);
            cusps[8] = normalize_360(c3 + 180.0);
            cusps[9] = mc;
            cusps[10] = c11;
            cusps[11] = c12;
        }
    }

    Ok(HouseCusps {
        system,
        cusps,
        ascendant_deg: asc,
        midheaven_deg: mc,
    })
}

fn fill_thirty_degree_wheel(cusps: &mut [f64; 12], first: f64) {
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = normalize_360(first + 30.0 * i as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELHI: (f64, f64) = (28.6139, 77.2090);
    const J2000_NOON: f64 = 2_451_545.0;

    fn assert_wheel_well_formed(hc: &HouseCusps) {
        let mut total = 0.0;
        for i in 0..12 {
            let c = hc.cusps[i];
            assert!((0.0..360.0).contains(&c), "cusp {} = {c}", i + 1);
            total += normalize_360(hc.cusps[(i + 1) % 12] - c);
        }
        // Monotonic modulo wrap: the 12 forward gaps close exactly one turn.
        assert!((total - 360.0).abs() < 1e-6, "gaps sum to {total}");
    }

    #[test]
    fn greenwich_j2000_noon_angles() {
        // Well-known chart: Greenwich 2000-01-01 12:00 UT has the
        // ascendant near 24 Aries and the MC near 10 Capricorn.
        let angles = asc_mc(J2000_NOON, 51.4772, 0.0).unwrap();
        assert!(
            (angles.ascendant_deg - 24.3).abs() < 1.0,
            "asc = {}",
            angles.ascendant_deg
        );
        assert!(
            (angles.midheaven_deg - 279.6).abs() < 1.0,
            "mc = {}",
            angles.midheaven_deg
        );
    }

    #[test]
    fn closed_form_systems_step_thirty_degrees() {
        for system in [HouseSystem::Equal, HouseSystem::WholeSign, HouseSystem::Vehlow] {
            let hc = house_cusps(J2000_NOON, DELHI.0, DELHI.1, system).unwrap();
            for i in 0..12 {
                let expected = normalize_360(hc.cusps[0] + 30.0 * i as f64);
                assert!(
                    (hc.cusps[i] - expected).abs() < 1e-9,
                    "{system:?} cusp {}",
                    i + 1
                );
            }
            assert_wheel_well_formed(&hc);
        }
    }

    #[test]
    fn equal_first_cusp_is_ascendant() {
        let hc = house_cusps(J2000_NOON, DELHI.0, DELHI.1, HouseSystem::Equal).unwrap();
        assert!((hc.cusps[0] - hc.ascendant_deg).abs() < 1e-12);
    }

    #[test]
    fn whole_sign_starts_at_sign_boundary() {
        let hc = house_cusps(J2000_NOON, DELHI.0, DELHI.1, HouseSystem::WholeSign).unwrap();
        assert!((hc.cusps[0] % 30.0).abs() < 1e-9);
        // The ascendant falls inside house 1.
        assert!(normalize_360(hc.ascendant_deg - hc.cusps[0]) < 30.0);
    }

    #[test]
    fn vehlow_centers_the_ascendant() {
        let hc = house_cusps(J2000_NOON, DELHI.0, DELHI.1, HouseSystem::Vehlow).unwrap();
        assert!((normalize_360(hc.ascendant_deg - hc.cusps[0]) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn quadrant_systems_pin_the_angles() {
        for system in [HouseSystem::Placidus, HouseSystem::Koch] {
            let hc = house_cusps(J2000_NOON, DELHI.0, DELHI.1, system).unwrap();
            assert!((hc.cusps[0] - hc.ascendant_deg).abs() < 1e-9, "{system:?}");
            assert!((hc.cusps[9] - hc.midheaven_deg).abs() < 1e-9, "{system:?}");
            assert!(
                (hc.cusps[3] - normalize_360(hc.midheaven_deg + 180.0)).abs() < 1e-9
            );
            assert!(
                (hc.cusps[6] - normalize_360(hc.ascendant_deg + 180.0)).abs() < 1e-9
            );
            assert_wheel_well_formed(&hc);
        }
    }

    #[test]
    fn opposite_cusps_face_each_other() {
        for &system in HouseSystem::all() {
            let hc = house_cusps(J2000_NOON, DELHI.0, DELHI.1, system).unwrap();
            for i in 0..6 {
                let gap = normalize_360(hc.cusps[i + 6] - hc.cusps[i]);
                assert!((gap - 180.0).abs() < 1e-6, "{system:?} cusp {}", i + 1);
            }
        }
    }

    #[test]
    fn quadrant_systems_agree_at_the_equator() {
        // With zero ascensional difference both reduce to even semi-arc
        // trisection.
        let p = house_cusps(J2000_NOON, 0.0, 77.2, HouseSystem::Placidus).unwrap();
        let k = house_cusps(J2000_NOON, 0.0, 77.2, HouseSystem::Koch).unwrap();
        for i in 0..12 {
            assert!(
                arc_delta(p.cusps[i], k.cusps[i]).abs() < 1e-5,
                "cusp {}: placidus {} vs koch {}",
                i + 1,
                p.cusps[i],
                k.cusps[i]
            );
        }
    }

    #[test]
    fn polar_latitude_rejected_for_quadrant_only() {
        for system in [HouseSystem::Placidus, HouseSystem::Koch] {
            assert!(matches!(
                house_cusps(J2000_NOON, 70.0, 25.0, system),
                Err(VedicError::InvalidLocation(_))
            ));
        }
        assert!(house_cusps(J2000_NOON, 70.0, 25.0, HouseSystem::Equal).is_ok());
    }

    #[test]
    fn location_validation() {
        assert!(matches!(
            asc_mc(J2000_NOON, 91.0, 0.0),
            Err(VedicError::InvalidLocation(_))
        ));
        assert!(matches!(
            asc_mc(J2000_NOON, 0.0, 181.0),
            Err(VedicError::InvalidLocation(_))
        ));
        assert!(matches!(
            asc_mc(f64::NAN, 0.0, 0.0),
            Err(VedicError::InvalidInput(_))
        ));
    }

    #[test]
    fn high_latitude_quadrant_cusps_stay_ordered() {
        // 60 degrees north is inside the supported band but strongly
        // distorted; the wheel must still close.
        for system in [HouseSystem::Placidus, HouseSystem::Koch] {
            let hc = house_cusps(2_460_310.5, 60.17, 24.94, system).unwrap();
            assert_wheel_well_formed(&hc);
        }
    }
}
