//! Error types for sidereal calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyoti_engine::EngineError;
use jyoti_time::TimeError;

/// Errors from the sidereal calculation layer.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the position engine.
    Engine(EngineError),
    /// Error from time conversion.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// House number outside 1-12.
    InvalidHouse(u8),
    /// Malformed input value.
    InvalidInput(&'static str),
    /// Iterative algorithm did not converge.
    NoConvergence(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "engine error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidHouse(n) => write!(f, "invalid house number: {n} (expected 1-12)"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for VedicError {}

impl From<EngineError> for VedicError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
