//! DerivePairwiseWeightsHandler - Derives a weight vector from pairwise
//! criterion comparisons.
//!
//! Derived weights are reported on their own and never feed a ranking.

use tracing::debug;

use crate::domain::ranking::{PairwiseMatrix, RankingError, WeightVector};

/// Command carrying a 4×4 comparison matrix in canonical criterion order.
#[derive(Debug, Clone)]
pub struct DerivePairwiseWeightsCommand {
    pub matrix: Vec<Vec<f64>>,
}

pub struct DerivePairwiseWeightsHandler;

impl DerivePairwiseWeightsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: DerivePairwiseWeightsCommand) -> Result<WeightVector, RankingError> {
        let matrix = PairwiseMatrix::try_from(cmd.matrix)?;
        let weights = matrix.derive_weights();
        debug!(?weights, "Derived pairwise weights");
        Ok(weights)
    }
}

impl Default for DerivePairwiseWeightsHandler {
    fn default() -> Self {
        Self::new()
    }
}
