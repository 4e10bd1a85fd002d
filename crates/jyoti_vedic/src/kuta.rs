//! Ashta Koota compatibility scoring.
//!
//! Eight independent sub-scores, each a pure lookup against the fixed
//! tables in [`crate::kuta_tables`], summed into a 36-point total with a
//! tier classification. Inputs are the `(sign, mansion, quarter)` triples
//! produced by the discretizer.

use crate::error::VedicError;
use crate::kuta_tables::{
    GANA_OF_MANSION, Gana, NADI_OF_MANSION, Relation, VARNA_OF_MANSION, VASHYA_OF_SIGN,
    Varna, YONI_ENEMIES, YONI_FRIENDS, YONI_OF_MANSION, YoniAnimal, natural_relation,
};
use crate::kuta_types::{ALL_KUTAS, CompatibilityScore, Kuta, KutaScore, MatchTier};
use crate::nakshatra::SignMansionQuarter;
use crate::rashi::ALL_RASHIS;

fn validate(triple: &SignMansionQuarter) -> Result<(), VedicError> {
    if !(1..=12).contains(&triple.sign) {
        return Err(VedicError::InvalidInput("sign outside 1-12"));
    }
    if !(1..=27).contains(&triple.mansion) {
        return Err(VedicError::InvalidInput("mansion outside 1-27"));
    }
    if !(1..=4).contains(&triple.quarter) {
        return Err(VedicError::InvalidInput("quarter outside 1-4"));
    }
    Ok(())
}

/// Varna (max 1): same class, or the Kshatriya-Brahmana pairing.
fn varna_score(a: &SignMansionQuarter, b: &SignMansionQuarter) -> u8 {
    let (va, vb) = (
        VARNA_OF_MANSION[a.mansion as usize - 1],
        VARNA_OF_MANSION[b.mansion as usize - 1],
    );
    let blessed_pair = matches!(
        (va, vb),
        (Varna::Kshatriya, Varna::Brahmana) | (Varna::Brahmana, Varna::Kshatriya)
    );
    if va == vb || blessed_pair { 1 } else { 0 }
}

/// Vashya (max 2): same sign class 2, the human-animal cross 1.
fn vashya_score(a: &SignMansionQuarter, b: &SignMansionQuarter) -> u8 {
    let (ca, cb) = (
        VASHYA_OF_SIGN[a.sign as usize - 1],
        VASHYA_OF_SIGN[b.sign as usize - 1],
    );
    if ca == cb { 2 } else { 1 }
}

/// Tara (max 3): cyclic mansion distance picks the tier.
///
/// Zero distance is the janma dosha (0), lifted to the full 3 when the
/// quarters differ; otherwise the distance's remainder mod 9 selects
/// the tier, with Vipat/Pratyari/Vadha remainders scoring 1.
fn tara_score(a: &SignMansionQuarter, b: &SignMansionQuarter) -> u8 {
    let d = (b.mansion as i16 - a.mansion as i16).rem_euclid(27) as u8;
    if d == 0 {
        return if a.quarter == b.quarter { 0 } else { 3 };
    }
    match d % 9 {
        2 | 4 | 6 => 1,
        0 => 2,
        _ => 3,
    }
}

/// Yoni (max 4): same animal 4, compatible 2, sworn enemies 0, neutral 1.
fn yoni_score(a: &SignMansionQuarter, b: &SignMansionQuarter) -> u8 {
    let (ya, yb) = (
        YONI_OF_MANSION[a.mansion as usize - 1],
        YONI_OF_MANSION[b.mansion as usize - 1],
    );
    if ya == yb {
        return 4;
    }
    let in_list = |list: &[(YoniAnimal, YoniAnimal)]| {
        list.iter()
            .any(|&(x, y)| (x == ya && y == yb) || (x == yb && y == ya))
    };
    if in_list(&YONI_ENEMIES) {
        0
    } else if in_list(&YONI_FRIENDS) {
        2
    } else {
        1
    }
}

/// Graha Maitri (max 5): disposition between the two sign lords.
///
/// Same lord 5; mutual friends 3; enmity in either direction 0; all other
/// combinations neutral 2.
fn graha_maitri_score(a: &SignMansionQuarter, b: &SignMansionQuarter) -> u8 {
    let la = ALL_RASHIS[a.sign as usize - 1].lord();
    let lb = ALL_RASHIS[b.sign as usize - 1].lord();
    if la == lb {
        return 5;
    }
    let (ab, ba) = (natural_relation(la, lb), natural_relation(lb, la));
    if ab == Relation::Enemy || ba == Relation::Enemy {
        0
    } else if ab == Relation::Friend && ba == Relation::Friend {
        3
    } else {
        2
    }
}

/// Gana (max 6): same class 6, Deva-Manushya cross 3, any pairing with
/// Rakshasa 0, else 1.
fn gana_score(a: &SignMansionQuarter, b: &SignMansionQuarter) -> u8 {
    let (ga, gb) = (
        GANA_OF_MANSION[a.mansion as usize - 1],
        GANA_OF_MANSION[b.mansion as usize - 1],
    );
    if ga == gb {
        6
    } else if matches!(
        (ga, gb),
        (Gana::Deva, Gana::Manushya) | (Gana::Manushya, Gana::Deva)
    ) {
        3
    } else if ga == Gana::Rakshasa || gb == Gana::Rakshasa {
        0
    } else {
        1
    }
}

/// Bhakoot (max 7): cyclic sign distance; the 2/12, 5/9 and 6/8
/// placements are the doshas.
fn bhakoot_score(a: &SignMansionQuarter, b: &SignMansionQuarter) -> u8 {
    let d = (b.sign as i16 - a.sign as i16).rem_euclid(12);
    match d {
        1 | 11 | 4 | 8 | 5 | 7 => 0,
        _ => 7,
    }
}

/// Nadi (max 8): differing class 8; same class is the dosha (0), nullified
/// when the mansion is identical but the quarter differs.
fn nadi_score(a: &SignMansionQuarter, b: &SignMansionQuarter) -> u8 {
    let (na, nb) = (
        NADI_OF_MANSION[a.mansion as usize - 1],
        NADI_OF_MANSION[b.mansion as usize - 1],
    );
    if na != nb {
        return 8;
    }
    if a.mansion == b.mansion && a.quarter != b.quarter {
        8
    } else {
        0
    }
}

/// Score one kuta for a pair of triples.
fn kuta_score(kuta: Kuta, a: &SignMansionQuarter, b: &SignMansionQuarter) -> u8 {
    match kuta {
        Kuta::Varna => varna_score(a, b),
        Kuta::Vashya => vashya_score(a, b),
        Kuta::Tara => tara_score(a, b),
        Kuta::Yoni => yoni_score(a, b),
        Kuta::GrahaMaitri => graha_maitri_score(a, b),
        Kuta::Gana => gana_score(a, b),
        Kuta::Bhakoot => bhakoot_score(a, b),
        Kuta::Nadi => nadi_score(a, b),
    }
}

/// Full Ashta Koota score for two `(sign, mansion, quarter)` triples.
pub fn score(
    a: &SignMansionQuarter,
    b: &SignMansionQuarter,
) -> Result<CompatibilityScore, VedicError> {
    validate(a)?;
    validate(b)?;

    let mut scores = [KutaScore {
        kuta: Kuta::Varna,
        score: 0,
        max: 1,
    }; 8];
    let mut total = 0u8;
    for (slot, &kuta) in scores.iter_mut().zip(ALL_KUTAS.iter()) {
        let s = kuta_score(kuta, a, b);
        debug_assert!(s <= kuta.max_score());
        *slot = KutaScore {
            kuta,
            score: s,
            max: kuta.max_score(),
        };
        total += s;
    }

    Ok(CompatibilityScore {
        scores,
        total,
        max_total: 36,
        tier: MatchTier::from_total(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::discretize;

    fn triple(sign: u8, mansion: u8, quarter: u8) -> SignMansionQuarter {
        SignMansionQuarter {
            sign,
            mansion,
            quarter,
        }
    }

    #[test]
    fn maxima_always_sum_to_36() {
        let pairs = [
            (triple(1, 1, 1), triple(1, 1, 1)),
            (triple(3, 7, 2), triple(9, 20, 4)),
            (triple(12, 27, 4), triple(1, 1, 1)),
        ];
        for (a, b) in pairs {
            let result = score(&a, &b).unwrap();
            let max_sum: u8 = result.scores.iter().map(|s| s.max).sum();
            assert_eq!(max_sum, 36);
            assert!(result.total <= 36);
        }
    }

    #[test]
    fn identical_triple_has_janma_and_nadi_dosha() {
        let a = triple(1, 1, 1);
        let result = score(&a, &a).unwrap();
        let by_kuta = |k: Kuta| result.scores.iter().find(|s| s.kuta == k).unwrap().score;
        assert_eq!(by_kuta(Kuta::Tara), 0);
        assert_eq!(by_kuta(Kuta::Nadi), 0);
        // Same sign, mansion and animal are all perfect.
        assert_eq!(by_kuta(Kuta::Yoni), 4);
        assert_eq!(by_kuta(Kuta::GrahaMaitri), 5);
        assert_eq!(by_kuta(Kuta::Gana), 6);
        assert_eq!(by_kuta(Kuta::Bhakoot), 7);
    }

    #[test]
    fn same_mansion_different_quarter_nullifies_both_doshas() {
        let a = triple(1, 1, 1);
        let b = triple(1, 1, 3);
        let result = score(&a, &b).unwrap();
        let by_kuta = |k: Kuta| result.scores.iter().find(|s| s.kuta == k).unwrap().score;
        assert_eq!(by_kuta(Kuta::Tara), 3);
        assert_eq!(by_kuta(Kuta::Nadi), 8);
    }

    #[test]
    fn scoring_respects_per_kuta_maxima() {
        for ma in [1u8, 5, 14, 27] {
            for mb in [2u8, 9, 18, 26] {
                let a = discretize((ma as f64 - 0.5) * (360.0 / 27.0));
                let b = discretize((mb as f64 - 0.5) * (360.0 / 27.0));
                let result = score(&a, &b).unwrap();
                for s in &result.scores {
                    assert!(s.score <= s.max, "{:?}", s.kuta);
                }
            }
        }
    }

    #[test]
    fn bhakoot_dosha_distances() {
        // Signs 1 and 2: the 2/12 placement.
        let result = score(&triple(1, 1, 1), &triple(2, 4, 1)).unwrap();
        let bhakoot = result.scores.iter().find(|s| s.kuta == Kuta::Bhakoot).unwrap();
        assert_eq!(bhakoot.score, 0);
        // Signs 1 and 7: the opposition, auspicious distance 6.
        let result = score(&triple(1, 1, 1), &triple(7, 16, 1)).unwrap();
        let bhakoot = result.scores.iter().find(|s| s.kuta == Kuta::Bhakoot).unwrap();
        assert_eq!(bhakoot.score, 7);
    }

    #[test]
    fn sworn_enemy_yoni_scores_zero() {
        // Ashwini (Horse) against Hasta (Buffalo).
        let result = score(&triple(1, 1, 1), &triple(6, 13, 1)).unwrap();
        let yoni = result.scores.iter().find(|s| s.kuta == Kuta::Yoni).unwrap();
        assert_eq!(yoni.score, 0);
    }

    #[test]
    fn rakshasa_cross_gana_scores_zero() {
        // Ashwini (Deva) against Krittika (Rakshasa).
        let result = score(&triple(1, 1, 1), &triple(1, 3, 1)).unwrap();
        let gana = result.scores.iter().find(|s| s.kuta == Kuta::Gana).unwrap();
        assert_eq!(gana.score, 0);
    }

    #[test]
    fn invalid_triples_rejected() {
        assert!(score(&triple(0, 1, 1), &triple(1, 1, 1)).is_err());
        assert!(score(&triple(1, 28, 1), &triple(1, 1, 1)).is_err());
        assert!(score(&triple(1, 1, 5), &triple(1, 1, 1)).is_err());
    }

    #[test]
    fn tier_assigned_from_total() {
        let result = score(&triple(1, 1, 1), &triple(1, 1, 3)).unwrap();
        assert_eq!(result.tier, MatchTier::from_total(result.total));
    }
}
