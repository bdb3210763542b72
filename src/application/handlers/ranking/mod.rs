//! Ranking command and query handlers.

mod derive_pairwise_weights;
mod get_tier_weights;
mod rank_carriers;

pub use derive_pairwise_weights::{DerivePairwiseWeightsCommand, DerivePairwiseWeightsHandler};
pub use get_tier_weights::{GetTierWeightsHandler, GetTierWeightsQuery};
pub use rank_carriers::{
    RankCarriersCommand, RankCarriersError, RankCarriersHandler, RankCarriersResult,
    REQUEST_DATA_SOURCE,
};
