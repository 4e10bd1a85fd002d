//! Nakshatra (lunar mansion) computation and the sign/mansion/quarter
//! discretizer.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each; each nakshatra has 4 padas (quarters) of
//! 3 deg 20'. Together with the 12-sign division this yields the
//! `(sign, mansion, quarter)` triple consumed by the dasha generator and
//! the compatibility scorer.

use serde::{Deserialize, Serialize};

use crate::rashi::rashi_from_longitude;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati (uniform 13 deg 20' each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Result of nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
    }
}

/// The `(sign, mansion, quarter)` triple derived from one sidereal
/// longitude. All three fields are 1-based: sign 1-12, mansion 1-27,
/// quarter 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignMansionQuarter {
    pub sign: u8,
    pub mansion: u8,
    pub quarter: u8,
}

/// Derive the `(sign, mansion, quarter)` triple from a sidereal longitude.
///
/// Pure integer arithmetic on the normalized longitude; deriving twice from
/// the same longitude always yields the same triple.
pub fn discretize(sidereal_lon_deg: f64) -> SignMansionQuarter {
    let rashi = rashi_from_longitude(sidereal_lon_deg);
    let nak = nakshatra_from_longitude(sidereal_lon_deg);
    SignMansionQuarter {
        sign: rashi.rashi_index + 1,
        mansion: nak.nakshatra_index + 1,
        quarter: nak.pada,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nakshatra_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn nakshatra_boundaries() {
        for i in 0..27u8 {
            let lon = i as f64 * NAKSHATRA_SPAN;
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.nakshatra_index, i, "boundary at {lon} deg");
            assert_eq!(info.pada, 1);
        }
    }

    #[test]
    fn pada_progression_within_one_nakshatra() {
        // Bharani spans [13.333, 26.667); its padas switch every 3 deg 20'.
        let base = NAKSHATRA_SPAN;
        for pada in 1..=4u8 {
            let lon = base + (pada as f64 - 0.5) * PADA_SPAN;
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.nakshatra, Nakshatra::Bharani);
            assert_eq!(info.pada, pada, "at {lon} deg");
        }
    }

    #[test]
    fn fifteen_degrees_example() {
        // 15 deg sidereal: sign 1 (Mesha), mansion 2 (Bharani), quarter 1.
        let triple = discretize(15.0);
        assert_eq!(
            triple,
            SignMansionQuarter {
                sign: 1,
                mansion: 2,
                quarter: 1
            }
        );
    }

    #[test]
    fn discretize_is_idempotent() {
        for k in 0..108 {
            let lon = k as f64 * 3.337 - 180.0;
            assert_eq!(discretize(lon), discretize(lon), "lon = {lon}");
        }
    }

    #[test]
    fn discretize_ranges() {
        for k in 0..720 {
            let t = discretize(k as f64 * 0.5);
            assert!((1..=12).contains(&t.sign));
            assert!((1..=27).contains(&t.mansion));
            assert!((1..=4).contains(&t.quarter));
        }
    }

    #[test]
    fn last_pada_of_revati() {
        let info = nakshatra_from_longitude(359.999);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
    }
}
