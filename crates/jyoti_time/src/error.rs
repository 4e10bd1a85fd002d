//! Error types for time conversion and instant validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from instant parsing and calendar conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The supplied instant carries a non-zero UTC offset.
    NonUtc { offset_seconds: i32 },
    /// Calendar fields do not form a valid date/time.
    InvalidDate(&'static str),
    /// A Julian Day or epoch argument was NaN or infinite.
    NonFinite(&'static str),
    /// RFC 3339 parsing failed.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonUtc { offset_seconds } => {
                write!(f, "instant is not UTC: offset {offset_seconds}s")
            }
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::NonFinite(msg) => write!(f, "non-finite value: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
