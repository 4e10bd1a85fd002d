//! Supported bodies: the 9 grahas of the jyotish canon.
//!
//! Rahu and Ketu are the mean lunar nodes — computed points, not physical
//! bodies, but they share the same position contract.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The 9 bodies the engine computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

/// All 9 bodies in traditional order (Surya .. Ketu).
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mercury => "Buddh",
            Self::Venus => "Shukra",
            Self::Mars => "Mangal",
            Self::Jupiter => "Guru",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Compact code (traditional-order index) for keys and interop.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Convert a compact code back into a [`Body`].
    pub const fn from_code(code: i32) -> Result<Self, EngineError> {
        match code {
            0 => Ok(Self::Sun),
            1 => Ok(Self::Moon),
            2 => Ok(Self::Mars),
            3 => Ok(Self::Mercury),
            4 => Ok(Self::Jupiter),
            5 => Ok(Self::Venus),
            6 => Ok(Self::Saturn),
            7 => Ok(Self::Rahu),
            8 => Ok(Self::Ketu),
            _ => Err(EngineError::UnsupportedBody(code)),
        }
    }

    /// All 9 bodies in traditional order.
    pub const fn all() -> &'static [Body; 9] {
        &ALL_BODIES
    }
}
