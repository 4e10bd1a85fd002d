//! Typed result records returned by the services.
//!
//! Each operation returns a record whose shape is fixed at compile time;
//! presentation layers read fields, not string-keyed maps. All records are
//! serde-derived so the cached ones can ride through the durable tier.

use serde::{Deserialize, Serialize};

use jyoti_engine::{Body, BodyPosition};
use jyoti_vedic::{
    CompatibilityScore, DashaPeriod, HouseCusps, MatchTier, SignMansionQuarter, current_period,
};

/// A body's position in the sidereal frame, with its discretized triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiderealPosition {
    pub body: Body,
    pub tropical_longitude_deg: f64,
    pub sidereal_longitude_deg: f64,
    pub latitude_deg: f64,
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
    pub triple: SignMansionQuarter,
}

impl SiderealPosition {
    pub(crate) fn from_tropical(
        pos: &BodyPosition,
        sidereal_longitude_deg: f64,
        triple: SignMansionQuarter,
    ) -> Self {
        Self {
            body: pos.body,
            tropical_longitude_deg: pos.longitude_deg,
            sidereal_longitude_deg,
            latitude_deg: pos.latitude_deg,
            speed_deg_per_day: pos.speed_deg_per_day,
            retrograde: pos.retrograde,
            triple,
        }
    }
}

/// A complete natal chart: all 9 bodies, the house wheel, and the Moon's
/// triple (the anchor for dasha and kuta work).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthChart {
    pub positions: Vec<SiderealPosition>,
    pub cusps: HouseCusps,
    pub moon_triple: SignMansionQuarter,
}

/// One full Vimshottari cycle anchored at birth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaTimeline {
    pub birth_jd: f64,
    pub moon_sidereal_longitude_deg: f64,
    /// The 9 mahadasha periods, contiguous, oldest first.
    pub periods: [DashaPeriod; 9],
}

impl DashaTimeline {
    /// The period ruling at `jd`; out-of-cycle instants clamp to the
    /// nearest period.
    pub fn current(&self, jd: f64) -> Option<&DashaPeriod> {
        current_period(&self.periods, jd)
    }

    /// Elapsed fraction of the ruling period at `jd`.
    pub fn progress(&self, jd: f64) -> Option<f64> {
        self.current(jd).map(|p| p.fraction_elapsed(jd))
    }
}

/// One kuta's contribution in display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KutaRow {
    pub name: String,
    pub score: u8,
    pub max: u8,
}

/// Ashta Koota result shaped for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub rows: Vec<KutaRow>,
    pub total: u8,
    pub max_total: u8,
    pub tier: MatchTier,
    pub recommendation: String,
}

impl From<CompatibilityScore> for MatchReport {
    fn from(score: CompatibilityScore) -> Self {
        Self {
            rows: score
                .scores
                .iter()
                .map(|s| KutaRow {
                    name: s.kuta.name().to_owned(),
                    score: s.score,
                    max: s.max,
                })
                .collect(),
            total: score.total,
            max_total: score.max_total,
            tier: score.tier,
            recommendation: score.tier.recommendation().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyoti_vedic::score;

    fn triple(sign: u8, mansion: u8, quarter: u8) -> SignMansionQuarter {
        SignMansionQuarter {
            sign,
            mansion,
            quarter,
        }
    }

    #[test]
    fn report_mirrors_the_raw_score() {
        let a = triple(1, 1, 1);
        let b = triple(5, 10, 2);
        let raw = score(&a, &b).unwrap();
        let report = MatchReport::from(raw);

        assert_eq!(report.rows.len(), 8);
        assert_eq!(report.max_total, 36);
        assert_eq!(
            report.total,
            report.rows.iter().map(|r| r.score as u16).sum::<u16>() as u8
        );
        for row in &report.rows {
            assert!(!row.name.is_empty());
            assert!(row.score <= row.max);
        }
        assert_eq!(report.recommendation, raw.tier.recommendation());
    }
}
