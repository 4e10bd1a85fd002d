//! The canonical UTC instant used at every engine entry point.
//!
//! `UtcInstant` wraps `chrono::DateTime<Utc>`. The only fallible
//! constructors are the ones that can receive a non-UTC value: a
//! fixed-offset datetime or an RFC 3339 string. Both reject any non-zero
//! offset instead of converting it — the boundary contract is "callers hand
//! us UTC", not "we fix time zones".

use chrono::{DateTime, FixedOffset, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd};

/// A UTC point in time, convertible to a Julian Day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtcInstant(DateTime<Utc>);

impl UtcInstant {
    /// Wrap a UTC datetime. Infallible: the type system already proves UTC.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Accept a fixed-offset datetime, rejecting any non-zero offset.
    pub fn from_fixed_offset(dt: DateTime<FixedOffset>) -> Result<Self, TimeError> {
        let offset = dt.offset().local_minus_utc();
        if offset != 0 {
            return Err(TimeError::NonUtc {
                offset_seconds: offset,
            });
        }
        Ok(Self(dt.with_timezone(&Utc)))
    }

    /// Parse an RFC 3339 string, rejecting any non-UTC offset.
    pub fn parse_rfc3339(s: &str) -> Result<Self, TimeError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| TimeError::Parse(e.to_string()))?;
        Self::from_fixed_offset(dt)
    }

    /// Build from calendar fields, all interpreted as UTC.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        match Utc.with_ymd_and_hms(year, month, day, hour, minute, second) {
            chrono::LocalResult::Single(dt) => Ok(Self(dt)),
            _ => Err(TimeError::InvalidDate("fields do not form a valid UTC time")),
        }
    }

    /// The wrapped datetime.
    pub fn datetime(self) -> DateTime<Utc> {
        self.0
    }

    /// Julian Day for this instant.
    pub fn julian_day(self) -> f64 {
        use chrono::Datelike;
        let date = self.0.date_naive();
        let day_frac = date.day() as f64
            + self.0.hour() as f64 / 24.0
            + self.0.minute() as f64 / 1440.0
            + self.0.second() as f64 / SECONDS_PER_DAY
            + self.0.nanosecond() as f64 / (SECONDS_PER_DAY * 1e9);
        calendar_to_jd(date.year(), date.month(), day_frac)
    }

    /// Reconstruct an instant from a Julian Day.
    pub fn from_julian_day(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::NonFinite("julian day"));
        }
        // Milliseconds since the Unix epoch (JD 2440587.5).
        let millis = (jd - 2_440_587.5) * SECONDS_PER_DAY * 1000.0;
        DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)
            .map(Self)
            .ok_or(TimeError::InvalidDate("julian day outside datetime range"))
    }
}

impl std::fmt::Display for UtcInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}
