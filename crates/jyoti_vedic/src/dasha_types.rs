//! Vimshottari dasha period types and tables.

use jyoti_engine::Body;
use serde::{Deserialize, Serialize};

/// The nine dasha lords in classical sequence starting from Ketu.
///
/// The cycle repeats: a birth in mansion `n` opens with lord `n mod 9`.
pub const VIMSHOTTARI_LORDS: [Body; 9] = [
    Body::Ketu,
    Body::Venus,
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Rahu,
    Body::Jupiter,
    Body::Saturn,
    Body::Mercury,
];

/// Nominal period length in years for each lord, same order as
/// [`VIMSHOTTARI_LORDS`]. The nine sum to the classical 120-year cycle.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Days per dasha year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Full cycle length in years.
pub const CYCLE_YEARS: f64 = 120.0;

/// One dasha period: a span of Julian Dates ruled by one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// Ruling body of the period.
    pub lord: Body,
    /// Start of the period, Julian Date (UTC).
    pub start_jd: f64,
    /// End of the period, Julian Date (UTC). Equals the next period's start.
    pub end_jd: f64,
}

impl DashaPeriod {
    /// Length of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether the period contains `jd` (start inclusive, end exclusive).
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }

    /// Fraction of the period elapsed at `jd`, clamped to [0, 1].
    ///
    /// The instant is an explicit parameter; nothing here reads a clock.
    pub fn fraction_elapsed(&self, jd: f64) -> f64 {
        let span = self.duration_days();
        if span <= 0.0 {
            return 1.0;
        }
        ((jd - self.start_jd) / span).clamp(0.0, 1.0)
    }
}
