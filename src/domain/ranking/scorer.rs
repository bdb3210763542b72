//! Scorer - Weighted composite score of a normalized candidate.

use super::{NormalizedCandidate, WeightVector};
use crate::domain::foundation::Criterion;

/// Composite scoring functions.
pub struct Scorer;

impl Scorer {
    /// Computes the composite score.
    ///
    /// # Algorithm
    /// score = w.cost × (1 − costFactor) + w.time × (1 − timeFactor)
    ///       + w.reliability × reliabilityFactor + w.tracking × trackingFactor
    ///
    /// With unit-sum weights the score lies in [0, 1]. Perturbed weights from
    /// sensitivity analysis are not unit-sum, so no upper bound is assumed.
    pub fn score(candidate: &NormalizedCandidate, weights: &WeightVector) -> f64 {
        Criterion::ALL
            .iter()
            .map(|&criterion| Self::term(candidate, weights, criterion))
            .sum()
    }

    /// The weighted, direction-corrected term one criterion adds to the score.
    pub fn term(
        candidate: &NormalizedCandidate,
        weights: &WeightVector,
        criterion: Criterion,
    ) -> f64 {
        weights.get(criterion) * candidate.effective_factor(criterion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::{
        Normalizer, RawCandidate, EXPRESS_WEIGHTS, RUSH_WEIGHTS, STANDARD_WEIGHTS,
    };

    fn normalized(cost: f64, time: f64, reliability: f64, tracking: bool) -> NormalizedCandidate {
        Normalizer::default()
            .normalize(vec![RawCandidate::new("c", "Carrier", cost, time, reliability, tracking)])
            .candidates
            .remove(0)
    }

    fn round3(value: f64) -> f64 {
        (value * 1000.0).round() / 1000.0
    }

    #[test]
    fn scores_reference_candidates_under_standard_weights() {
        let a = normalized(1200.0, 14.0, 0.85, true);
        let b = normalized(950.0, 18.0, 0.78, false);
        let c = normalized(1450.0, 10.0, 0.92, true);

        assert_eq!(round3(Scorer::score(&a, &STANDARD_WEIGHTS)), 0.710);
        assert_eq!(round3(Scorer::score(&b, &STANDARD_WEIGHTS)), 0.656);
        assert_eq!(round3(Scorer::score(&c, &STANDARD_WEIGHTS)), 0.664);
    }

    #[test]
    fn fast_reliable_carrier_pulls_ahead_as_time_weight_grows() {
        let cheap = normalized(950.0, 18.0, 0.78, false);
        let fast = normalized(1450.0, 10.0, 0.92, true);

        for weights in [STANDARD_WEIGHTS, EXPRESS_WEIGHTS, RUSH_WEIGHTS] {
            assert!(Scorer::score(&fast, &weights) > Scorer::score(&cheap, &weights));
        }
        assert_eq!(round3(Scorer::score(&fast, &RUSH_WEIGHTS)), 0.729);
        assert_eq!(round3(Scorer::score(&cheap, &RUSH_WEIGHTS)), 0.491);
    }

    #[test]
    fn best_possible_candidate_scores_one() {
        let best = normalized(0.0, 0.0, 1.0, true);
        assert!((Scorer::score(&best, &STANDARD_WEIGHTS) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn worst_possible_candidate_scores_zero() {
        let worst = normalized(5000.0, 60.0, 0.0, false);
        assert_eq!(Scorer::score(&worst, &STANDARD_WEIGHTS), 0.0);
    }

    #[test]
    fn cheaper_quote_scores_higher_all_else_equal() {
        let cheaper = normalized(1000.0, 12.0, 0.8, true);
        let pricier = normalized(1300.0, 12.0, 0.8, true);
        assert!(
            Scorer::score(&cheaper, &STANDARD_WEIGHTS) > Scorer::score(&pricier, &STANDARD_WEIGHTS)
        );
    }

    #[test]
    fn terms_sum_to_score() {
        let n = normalized(1200.0, 14.0, 0.85, true);
        let total: f64 = Criterion::ALL
            .iter()
            .map(|&c| Scorer::term(&n, &EXPRESS_WEIGHTS, c))
            .sum();
        assert_eq!(total, Scorer::score(&n, &EXPRESS_WEIGHTS));
    }
}
