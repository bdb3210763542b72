//! Pairwise comparison weights (analytic hierarchy process).
//!
//! This is a separate weight path from the fixed urgency tiers. Nothing in the
//! ranking engine consumes it; callers that want custom weights must ask for
//! a derivation explicitly.

use serde::{Deserialize, Serialize};

use super::{RankingError, WeightVector};
use crate::domain::foundation::Criterion;

const SIZE: usize = Criterion::ALL.len();

/// A 4×4 matrix where entry `[i][j]` states how much more important
/// criterion `i` is than criterion `j`, in canonical criterion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PairwiseMatrix([[f64; SIZE]; SIZE]);

impl PairwiseMatrix {
    /// Validates shape and entries. Every entry must be finite and positive.
    pub fn try_new(rows: Vec<Vec<f64>>) -> Result<Self, RankingError> {
        if rows.len() != SIZE {
            return Err(RankingError::InvalidPairwiseMatrix(format!(
                "expected {SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut cells = [[0.0; SIZE]; SIZE];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != SIZE {
                return Err(RankingError::InvalidPairwiseMatrix(format!(
                    "row {i} has {} entries, expected {SIZE}",
                    row.len()
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(RankingError::InvalidPairwiseMatrix(format!(
                        "entry [{i}][{j}] must be a positive number, got {value}"
                    )));
                }
                cells[i][j] = value;
            }
        }

        Ok(Self(cells))
    }

    /// Derives weights by column-normalizing the matrix and averaging each row.
    ///
    /// The result is rescaled to sum to 1.0.
    pub fn derive_weights(&self) -> WeightVector {
        let mut column_sums = [0.0; SIZE];
        for row in &self.0 {
            for (j, value) in row.iter().enumerate() {
                column_sums[j] += value;
            }
        }

        let mut weights = [0.0; SIZE];
        for (i, row) in self.0.iter().enumerate() {
            let normalized_total: f64 = row
                .iter()
                .zip(column_sums.iter())
                .map(|(value, sum)| value / sum)
                .sum();
            weights[i] = normalized_total / SIZE as f64;
        }

        WeightVector::from_array(weights).renormalized()
    }
}

impl TryFrom<Vec<Vec<f64>>> for PairwiseMatrix {
    type Error = RankingError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::try_new(rows)
    }
}

impl From<PairwiseMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PairwiseMatrix) -> Self {
        matrix.0.iter().map(|row| row.to_vec()).collect()
    }
}
