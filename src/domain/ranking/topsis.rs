//! TOPSIS - Closeness to the ideal carrier within one batch.
//!
//! Unlike the weighted sum, a TOPSIS score is relative: it depends on every
//! other candidate in the batch, because the ideal and anti-ideal points are
//! built from the batch's best and worst weighted values.

use serde::{Deserialize, Serialize};

use super::{CriterionContributions, NormalizedCandidate, WeightVector};
use crate::domain::foundation::{Criterion, Direction};

/// Which scoring model ranks a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    /// Direction-corrected weighted sum of calibrated factors.
    #[default]
    WeightedSum,
    /// Relative closeness to the batch's ideal solution.
    Topsis,
}

impl ScoringMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMethod::WeightedSum => "weighted_sum",
            ScoringMethod::Topsis => "topsis",
        }
    }
}

/// Euclidean distances from the ideal and anti-ideal solutions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Separation {
    pub ideal: f64,
    pub negative: f64,
}

/// TOPSIS result for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopsisEvaluation {
    /// `negative / (ideal + negative)`, in [0, 1].
    pub closeness: f64,
    pub separation: Separation,
    /// Per-criterion closeness, rescaled to shares of their sum.
    pub contributions: CriterionContributions,
}

/// Closeness reported when a candidate sits on both the ideal and the
/// anti-ideal point, e.g. a single-candidate batch.
pub const NEUTRAL_CLOSENESS: f64 = 0.5;

/// TOPSIS scoring functions.
pub struct TopsisScorer;

impl TopsisScorer {
    /// Evaluates every candidate of a batch, in input order.
    ///
    /// # Algorithm
    /// 1. Vector-normalize each criterion column (cost, delivery time,
    ///    reliability, tracking) by its Euclidean norm
    /// 2. Multiply by the weights
    /// 3. Ideal = best value per column, anti-ideal = worst, by direction
    /// 4. Closeness = S⁻ / (S⁺ + S⁻)
    ///
    /// # Edge Cases
    /// - A column of zeros stays all zero
    /// - S⁺ + S⁻ = 0: closeness is [`NEUTRAL_CLOSENESS`]
    /// - All per-criterion closeness zero: contributions are all zero
    pub fn evaluate(
        candidates: &[NormalizedCandidate],
        weights: &WeightVector,
    ) -> Vec<TopsisEvaluation> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let rows: Vec<[f64; 4]> = candidates.iter().map(Self::metrics).collect();

        let mut norms = [0.0f64; 4];
        for row in &rows {
            for (norm, value) in norms.iter_mut().zip(row) {
                *norm += value * value;
            }
        }
        let norms = norms.map(f64::sqrt);

        let weighted: Vec<[f64; 4]> = rows
            .iter()
            .map(|row| {
                Criterion::ALL.map(|criterion| {
                    let j = criterion.index();
                    if norms[j] == 0.0 {
                        0.0
                    } else {
                        row[j] / norms[j] * weights.get(criterion)
                    }
                })
            })
            .collect();

        let (ideal, anti_ideal) = Self::reference_points(&weighted);

        weighted
            .iter()
            .map(|row| Self::evaluate_row(row, &ideal, &anti_ideal))
            .collect()
    }

    /// Convenience wrapper returning only the closeness scores.
    pub fn scores(candidates: &[NormalizedCandidate], weights: &WeightVector) -> Vec<f64> {
        Self::evaluate(candidates, weights)
            .into_iter()
            .map(|evaluation| evaluation.closeness)
            .collect()
    }

    /// Raw decision-matrix row. Reliability and tracking use their [0, 1] factors.
    fn metrics(candidate: &NormalizedCandidate) -> [f64; 4] {
        [
            candidate.candidate.cost,
            candidate.candidate.delivery_time,
            candidate.reliability_factor,
            candidate.tracking_factor,
        ]
    }

    fn reference_points(weighted: &[[f64; 4]]) -> ([f64; 4], [f64; 4]) {
        let mut ideal = [0.0; 4];
        let mut anti_ideal = [0.0; 4];

        for criterion in Criterion::ALL {
            let j = criterion.index();
            let column = weighted.iter().map(|row| row[j]);
            let max = column.clone().fold(f64::NEG_INFINITY, f64::max);
            let min = column.fold(f64::INFINITY, f64::min);

            (ideal[j], anti_ideal[j]) = match criterion.direction() {
                Direction::MaximizeBetter => (max, min),
                Direction::MinimizeBetter => (min, max),
            };
        }

        (ideal, anti_ideal)
    }

    fn evaluate_row(row: &[f64; 4], ideal: &[f64; 4], anti_ideal: &[f64; 4]) -> TopsisEvaluation {
        let mut to_ideal = 0.0;
        let mut to_negative = 0.0;
        let mut per_criterion = [0.0; 4];

        for j in 0..4 {
            let d_plus = (row[j] - ideal[j]).powi(2);
            let d_minus = (row[j] - anti_ideal[j]).powi(2);
            to_ideal += d_plus;
            to_negative += d_minus;
            if d_plus + d_minus > 0.0 {
                per_criterion[j] = d_minus / (d_plus + d_minus);
            }
        }

        let separation = Separation {
            ideal: to_ideal.sqrt(),
            negative: to_negative.sqrt(),
        };
        let total = separation.ideal + separation.negative;
        let closeness = if total > 0.0 {
            separation.negative / total
        } else {
            NEUTRAL_CLOSENESS
        };

        let share_total: f64 = per_criterion.iter().sum();
        let contributions = if share_total > 0.0 {
            CriterionContributions(per_criterion.map(|c| c / share_total))
        } else {
            CriterionContributions::ZERO
        };

        TopsisEvaluation {
            closeness,
            separation,
            contributions,
        }
    }
}
