//! Time primitives for the jyotir engine.
//!
//! This crate provides:
//! - `UtcInstant`, the canonical UTC boundary type (non-UTC input rejected)
//! - Julian Date ↔ calendar conversions
//! - Greenwich Mean Sidereal Time and Local Sidereal Time
//! - Mean obliquity of the ecliptic
//!
//! All downstream astronomy runs on Julian Day `f64`; `UtcInstant` exists
//! so that the "instants are UTC" contract is enforced once, at the edge.

pub mod error;
pub mod instant;
pub mod julian;
pub mod obliquity;
pub mod sidereal;

pub use error::TimeError;
pub use instant::UtcInstant;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use obliquity::{mean_obliquity_deg, mean_obliquity_rad};
pub use sidereal::{gmst_rad, local_sidereal_time_rad};
