//! House system selectors and cusp result types.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::normalize_360;

/// Supported house systems.
///
/// Equal, WholeSign and Vehlow are closed-form (the ascendant or sign start
/// plus fixed 30-degree steps). Placidus and Koch are quadrant systems
/// solved by semi-arc geometry and restricted to latitudes below the polar
/// circles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseSystem {
    /// 30-degree houses from the ascendant degree.
    Equal,
    /// Houses coincide with whole signs; house 1 is the ascendant's sign.
    WholeSign,
    /// 30-degree houses with the ascendant at the middle of house 1.
    Vehlow,
    /// Placidus: cusps trisect each degree's own diurnal/nocturnal semi-arc.
    Placidus,
    /// Koch: cusps trisect the MC degree's semi-arc in rising time.
    Koch,
}

/// All supported systems in enum order.
const ALL_SYSTEMS: [HouseSystem; 5] = [
    HouseSystem::Equal,
    HouseSystem::WholeSign,
    HouseSystem::Vehlow,
    HouseSystem::Placidus,
    HouseSystem::Koch,
];

impl HouseSystem {
    /// Display name of the system.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equal => "Equal",
            Self::WholeSign => "Whole Sign",
            Self::Vehlow => "Vehlow",
            Self::Placidus => "Placidus",
            Self::Koch => "Koch",
        }
    }

    /// Whether this is a quadrant system (latitude-restricted, iterative).
    pub const fn is_quadrant(self) -> bool {
        matches!(self, Self::Placidus | Self::Koch)
    }

    /// All supported systems.
    pub const fn all() -> &'static [HouseSystem] {
        &ALL_SYSTEMS
    }
}

/// Ascendant and midheaven pair, shared by every house system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AscMc {
    /// Ecliptic longitude of the ascendant in [0, 360).
    pub ascendant_deg: f64,
    /// Ecliptic longitude of the midheaven in [0, 360).
    pub midheaven_deg: f64,
}

/// The 12 house cusps for one system at one instant and location.
///
/// `cusps[0]` is house 1 (the ascendant for quadrant and equal systems);
/// ordering is monotonic modulo the 360-degree wrap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub system: HouseSystem,
    /// Cusp longitudes, house 1 first, each in [0, 360).
    pub cusps: [f64; 12],
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
}

impl HouseCusps {
    /// Cusp longitude for a 1-based house number.
    pub fn cusp(&self, house: u8) -> Result<f64, VedicError> {
        if !(1..=12).contains(&house) {
            return Err(VedicError::InvalidHouse(house));
        }
        Ok(self.cusps[house as usize - 1])
    }

    /// 1-based house containing an ecliptic longitude.
    ///
    /// A longitude exactly on a cusp belongs to the house that cusp opens.
    pub fn house_of(&self, lon_deg: f64) -> u8 {
        let lon = normalize_360(lon_deg);
        for i in 0..12 {
            let start = self.cusps[i];
            let end = self.cusps[(i + 1) % 12];
            let span = normalize_360(end - start);
            let offset = normalize_360(lon - start);
            if offset < span {
                return (i + 1) as u8;
            }
        }
        // Unreachable for well-formed cusps; the wrap math always lands.
        12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_cusps(asc: f64) -> HouseCusps {
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = normalize_360(asc + 30.0 * i as f64);
        }
        HouseCusps {
            system: HouseSystem::Equal,
            cusps,
            ascendant_deg: asc,
            midheaven_deg: normalize_360(asc + 270.0),
        }
    }

    #[test]
    fn cusp_lookup_bounds() {
        let hc = equal_cusps(100.0);
        assert!(hc.cusp(0).is_err());
        assert!(hc.cusp(13).is_err());
        assert!((hc.cusp(1).unwrap() - 100.0).abs() < 1e-12);
        assert!((hc.cusp(12).unwrap() - 70.0).abs() < 1e-12);
    }

    #[test]
    fn house_of_walks_the_wheel() {
        let hc = equal_cusps(100.0);
        assert_eq!(hc.house_of(100.0), 1);
        assert_eq!(hc.house_of(129.999), 1);
        assert_eq!(hc.house_of(130.0), 2);
        assert_eq!(hc.house_of(99.0), 12);
        // Wraparound segment
        assert_eq!(hc.house_of(10.0), 10);
    }

    #[test]
    fn quadrant_flags() {
        assert!(HouseSystem::Placidus.is_quadrant());
        assert!(HouseSystem::Koch.is_quadrant());
        assert!(!HouseSystem::Equal.is_quadrant());
        assert!(!HouseSystem::WholeSign.is_quadrant());
        assert!(!HouseSystem::Vehlow.is_quadrant());
    }
}
