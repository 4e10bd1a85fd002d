//! Sidereal (Vedic) calculations over the position engine's output.
//!
//! This crate provides:
//! - Ayanamsha values and tropical → sidereal conversion
//! - Rashi / nakshatra identification and the `(sign, mansion, quarter)`
//!   discretizer
//! - House cusps for closed-form and quadrant systems
//! - Vimshottari dasha timelines
//! - Ashta Koota compatibility scoring
//!
//! Everything here is pure arithmetic over degrees and Julian Dates; the
//! instant is always an explicit parameter.

pub mod ayanamsha;
pub mod bhava;
pub mod bhava_types;
pub mod dasha;
pub mod dasha_types;
pub mod error;
pub mod kuta;
pub mod kuta_tables;
pub mod kuta_types;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use ayanamsha::{Ayanamsha, ayanamsha_deg, to_sidereal};
pub use bhava::{MAX_QUADRANT_LATITUDE_DEG, asc_mc, house_cusps};
pub use bhava_types::{AscMc, HouseCusps, HouseSystem};
pub use dasha::{current_period, generate};
pub use dasha_types::{
    CYCLE_YEARS, DAYS_PER_YEAR, DashaPeriod, VIMSHOTTARI_LORDS, VIMSHOTTARI_YEARS,
};
pub use error::VedicError;
pub use kuta::score;
pub use kuta_types::{CompatibilityScore, Kuta, KutaScore, MatchTier};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, SignMansionQuarter,
    discretize, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, RashiInfo, rashi_from_longitude};
