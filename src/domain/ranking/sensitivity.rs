//! Contribution and sensitivity analysis for a scored candidate.
//!
//! Contributions explain *why* a candidate scored what it did; sensitivity
//! shows *how much* that score moves when one priority is nudged.

use serde::{Deserialize, Serialize};

use super::{NormalizedCandidate, Scorer, WeightVector};
use crate::domain::foundation::Criterion;

/// Fractional share of the score attributable to each criterion, in
/// canonical order (cost, time, reliability, tracking).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionContributions(pub [f64; 4]);

impl CriterionContributions {
    pub const ZERO: Self = Self([0.0; 4]);

    pub fn get(&self, criterion: Criterion) -> f64 {
        self.0[criterion.index()]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// The criterion with the largest share. Ties resolve to canonical order.
    pub fn dominant(&self) -> Criterion {
        let mut best = Criterion::Cost;
        for criterion in Criterion::ALL {
            if self.get(criterion) > self.get(best) {
                best = criterion;
            }
        }
        best
    }
}

/// How perturbed weight vectors are formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityMode {
    /// Scale one weight and leave the others as they are. The vector no
    /// longer sums to 1, so each delta is a partial-derivative probe rather
    /// than an alternative priority profile.
    #[default]
    Probe,
    /// Scale one weight, then rescale the vector to sum to 1.
    Renormalized,
}

/// Percentage score changes under single-weight perturbations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityAnalysis {
    pub weight_changes: Vec<String>,
    pub score_changes: Vec<f64>,
}

/// The six perturbations, in reporting order.
pub const PERTURBATIONS: [(Criterion, f64, &str); 6] = [
    (Criterion::Cost, 1.1, "Cost +10%"),
    (Criterion::Cost, 0.9, "Cost -10%"),
    (Criterion::Time, 1.1, "Time +10%"),
    (Criterion::Time, 0.9, "Time -10%"),
    (Criterion::Reliability, 1.1, "Reliability +10%"),
    (Criterion::Reliability, 0.9, "Reliability -10%"),
];

fn is_zero_score(score: f64) -> bool {
    score.abs() < f64::EPSILON
}

/// Per-criterion contribution shares.
pub struct ContributionAnalyzer;

impl ContributionAnalyzer {
    /// Computes `weight_i × effectiveFactor_i / score` for each criterion.
    ///
    /// # Edge Cases
    /// - Zero score: returns all-zero contributions instead of dividing by zero
    pub fn contributions(
        candidate: &NormalizedCandidate,
        weights: &WeightVector,
        score: f64,
    ) -> CriterionContributions {
        if is_zero_score(score) {
            return CriterionContributions::ZERO;
        }

        let shares =
            Criterion::ALL.map(|criterion| Scorer::term(candidate, weights, criterion) / score);
        CriterionContributions(shares)
    }
}

/// Weight perturbation analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensitivityAnalyzer {
    mode: SensitivityMode,
}

impl SensitivityAnalyzer {
    pub fn new(mode: SensitivityMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> SensitivityMode {
        self.mode
    }

    /// Re-scores the candidate under each of the six perturbations and
    /// reports `(perturbed − original) / original × 100`.
    ///
    /// Deltas are always relative to this candidate's own original score.
    ///
    /// # Edge Cases
    /// - Zero original score: every delta is reported as 0
    pub fn analyze(
        &self,
        candidate: &NormalizedCandidate,
        weights: &WeightVector,
        original_score: f64,
    ) -> SensitivityAnalysis {
        self.analyze_with(weights, original_score, |_, perturbed| {
            Scorer::score(candidate, perturbed)
        })
    }

    /// Same as [`analyze`](Self::analyze), with the candidate re-scored by
    /// `rescore(perturbation_index, perturbed_weights)`. Batch-relative models
    /// such as TOPSIS look the score up in a re-evaluated batch.
    pub fn analyze_with<F>(
        &self,
        weights: &WeightVector,
        original_score: f64,
        rescore: F,
    ) -> SensitivityAnalysis
    where
        F: Fn(usize, &WeightVector) -> f64,
    {
        let mut weight_changes = Vec::with_capacity(PERTURBATIONS.len());
        let mut score_changes = Vec::with_capacity(PERTURBATIONS.len());

        for (index, (criterion, factor, label)) in PERTURBATIONS.into_iter().enumerate() {
            weight_changes.push(label.to_string());

            if is_zero_score(original_score) {
                score_changes.push(0.0);
                continue;
            }

            let perturbed_weights = self.perturb(weights, criterion, factor);
            let perturbed_score = rescore(index, &perturbed_weights);
            score_changes.push((perturbed_score - original_score) / original_score * 100.0);
        }

        SensitivityAnalysis {
            weight_changes,
            score_changes,
        }
    }

    /// The six perturbed weight vectors, in [`PERTURBATIONS`] order.
    pub fn perturbed_weights(&self, weights: &WeightVector) -> Vec<WeightVector> {
        PERTURBATIONS
            .iter()
            .map(|&(criterion, factor, _)| self.perturb(weights, criterion, factor))
            .collect()
    }

    fn perturb(&self, weights: &WeightVector, criterion: Criterion, factor: f64) -> WeightVector {
        let scaled = weights.scaled(criterion, factor);
        match self.mode {
            SensitivityMode::Probe => scaled,
            SensitivityMode::Renormalized => scaled.renormalized(),
        }
    }
}
