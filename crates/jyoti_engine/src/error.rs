//! Error types for the position engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised by position queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    /// The epoch argument was NaN or infinite.
    NonFiniteEpoch,
    /// A body code or name did not map to a supported body.
    UnsupportedBody(i32),
    /// Internal series evaluation produced a non-finite value.
    Internal(&'static str),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteEpoch => write!(f, "epoch must be finite"),
            Self::UnsupportedBody(code) => write!(f, "unsupported body code: {code}"),
            Self::Internal(msg) => write!(f, "internal engine error: {msg}"),
        }
    }
}

impl Error for EngineError {}
