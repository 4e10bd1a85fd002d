//! Vimshottari dasha timeline generation.
//!
//! The birth nakshatra selects the opening lord; the Moon's angular
//! progress through that nakshatra has already consumed the matching
//! share of the lord's nominal period, so the first period carries only
//! the remaining balance. The eight periods that follow run their full
//! nominal lengths, giving a contiguous nine-period timeline.

use crate::dasha_types::{
    DAYS_PER_YEAR, DashaPeriod, VIMSHOTTARI_LORDS, VIMSHOTTARI_YEARS,
};
use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::normalize_360;

/// Generate the nine-period Vimshottari timeline from the Moon's sidereal
/// longitude at birth.
///
/// Periods are strictly contiguous: each period's end is the next one's
/// start. When the Moon sits exactly on a nakshatra boundary the first
/// period is whole and the nine together span the full 120-year cycle.
pub fn generate(moon_sidereal_lon_deg: f64, birth_jd: f64) -> [DashaPeriod; 9] {
    let lon = normalize_360(moon_sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as usize).min(26);
    let start_lord_idx = nak_idx % 9;

    // Share of the birth nakshatra already traversed.
    let elapsed_frac = (lon - nak_idx as f64 * NAKSHATRA_SPAN) / NAKSHATRA_SPAN;

    let mut periods = [DashaPeriod {
        lord: VIMSHOTTARI_LORDS[0],
        start_jd: birth_jd,
        end_jd: birth_jd,
    }; 9];

    let mut cursor = birth_jd;
    for (offset, period) in periods.iter_mut().enumerate() {
        let idx = (start_lord_idx + offset) % 9;
        let full_days = VIMSHOTTARI_YEARS[idx] * DAYS_PER_YEAR;
        let duration = if offset == 0 {
            full_days * (1.0 - elapsed_frac)
        } else {
            full_days
        };
        *period = DashaPeriod {
            lord: VIMSHOTTARI_LORDS[idx],
            start_jd: cursor,
            end_jd: cursor + duration,
        };
        cursor += duration;
    }
    periods
}

/// The period active at `query_jd`.
///
/// The instant is an explicit parameter. An instant before the first
/// period clamps to the first; one at or past the final boundary clamps to
/// the last.
pub fn current_period(periods: &[DashaPeriod], query_jd: f64) -> Option<&DashaPeriod> {
    let first = periods.first()?;
    if query_jd < first.start_jd {
        return Some(first);
    }
    periods
        .iter()
        .find(|p| p.contains(query_jd))
        .or_else(|| periods.last())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha_types::CYCLE_YEARS;
    use jyoti_engine::Body;

    const BIRTH: f64 = 2_451_545.0;

    #[test]
    fn zero_offset_spans_full_cycle() {
        let periods = generate(0.0, BIRTH);
        let total: f64 = periods.iter().map(|p| p.duration_days()).sum();
        assert!((total - CYCLE_YEARS * DAYS_PER_YEAR).abs() < 1e-6);
        assert_eq!(periods[0].lord, Body::Ketu);
        assert!((periods[0].duration_days() - 7.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn periods_are_contiguous() {
        let periods = generate(211.7, BIRTH);
        for w in periods.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
        assert_eq!(periods[0].start_jd, BIRTH);
    }

    #[test]
    fn second_mansion_opens_with_venus() {
        // Mansion index 1 (Bharani) maps to the second lord in the table.
        let periods = generate(NAKSHATRA_SPAN + 0.001, BIRTH);
        assert_eq!(periods[0].lord, Body::Venus);
        assert_eq!(periods[1].lord, Body::Sun);
    }

    #[test]
    fn lord_sequence_cycles_from_start_lord() {
        // Mansion 10 (index 9) wraps back to Ketu.
        let periods = generate(9.0 * NAKSHATRA_SPAN + 1.0, BIRTH);
        assert_eq!(periods[0].lord, Body::Ketu);
        assert_eq!(periods[8].lord, Body::Mercury);
    }

    #[test]
    fn first_period_carries_only_the_balance() {
        // Halfway through Ashwini: half of Ketu's 7 years remain.
        let periods = generate(NAKSHATRA_SPAN / 2.0, BIRTH);
        assert_eq!(periods[0].lord, Body::Ketu);
        assert!(
            (periods[0].duration_days() - 3.5 * DAYS_PER_YEAR).abs() < 1e-6,
            "balance = {} days",
            periods[0].duration_days()
        );
        // The rest are whole.
        assert!((periods[1].duration_days() - 20.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn current_period_finds_the_bracketing_span() {
        let periods = generate(0.0, BIRTH);
        // 10 years in: past Ketu (7y), inside Venus (20y).
        let jd = BIRTH + 10.0 * DAYS_PER_YEAR;
        let p = current_period(&periods, jd).unwrap();
        assert_eq!(p.lord, Body::Venus);
        assert!(p.contains(jd));
    }

    #[test]
    fn current_period_clamps_outside_the_timeline() {
        let periods = generate(100.0, BIRTH);
        let before = current_period(&periods, BIRTH - 1000.0).unwrap();
        assert_eq!(before.start_jd, periods[0].start_jd);
        let after = current_period(&periods, BIRTH + 1e6).unwrap();
        assert_eq!(after.end_jd, periods[8].end_jd);
    }

    #[test]
    fn current_period_empty_slice() {
        assert!(current_period(&[], BIRTH).is_none());
    }
}
