//! Ashta Koota result types.

use serde::{Deserialize, Serialize};

/// The eight kutas in classical order, weighted 1 through 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kuta {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

/// All eight kutas in order.
pub const ALL_KUTAS: [Kuta; 8] = [
    Kuta::Varna,
    Kuta::Vashya,
    Kuta::Tara,
    Kuta::Yoni,
    Kuta::GrahaMaitri,
    Kuta::Gana,
    Kuta::Bhakoot,
    Kuta::Nadi,
];

impl Kuta {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahaMaitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    /// Maximum points this kuta contributes. The eight maxima sum to 36.
    pub const fn max_score(self) -> u8 {
        match self {
            Self::Varna => 1,
            Self::Vashya => 2,
            Self::Tara => 3,
            Self::Yoni => 4,
            Self::GrahaMaitri => 5,
            Self::Gana => 6,
            Self::Bhakoot => 7,
            Self::Nadi => 8,
        }
    }

    /// All eight kutas in order.
    pub const fn all() -> &'static [Kuta; 8] {
        &ALL_KUTAS
    }
}

/// One kuta's contribution to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KutaScore {
    pub kuta: Kuta,
    /// Points awarded, `0..=max`.
    pub score: u8,
    /// Maximum points for this kuta.
    pub max: u8,
}

/// Match quality tier over the 36-point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    Excellent,
    VeryGood,
    Good,
    Poor,
}

impl MatchTier {
    /// Classify a total against the fixed threshold ladder.
    pub const fn from_total(total: u8) -> MatchTier {
        match total {
            33..=36 => Self::Excellent,
            25..=32 => Self::VeryGood,
            18..=24 => Self::Good,
            _ => Self::Poor,
        }
    }

    /// Fixed recommendation text for the tier.
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent match",
            Self::VeryGood => "Very good match",
            Self::Good => "Good match",
            Self::Poor => "Match not recommended",
        }
    }
}

/// Full Ashta Koota result: the eight sub-scores, their total and tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    /// Sub-scores in classical kuta order.
    pub scores: [KutaScore; 8],
    /// Sum of the eight sub-scores, 0-36.
    pub total: u8,
    /// Always 36.
    pub max_total: u8,
    pub tier: MatchTier,
}
