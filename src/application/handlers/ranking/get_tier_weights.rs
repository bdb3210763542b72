//! GetTierWeightsHandler - Query handler for an urgency tier's weights.

use crate::domain::ranking::{RankingError, WeightResolver, WeightVector};

/// Query for the fixed weights of one urgency tier.
#[derive(Debug, Clone)]
pub struct GetTierWeightsQuery {
    pub urgency_tier: String,
}

pub struct GetTierWeightsHandler;

impl GetTierWeightsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetTierWeightsQuery) -> Result<WeightVector, RankingError> {
        WeightResolver::resolve(&query.urgency_tier)
    }
}

impl Default for GetTierWeightsHandler {
    fn default() -> Self {
        Self::new()
    }
}
