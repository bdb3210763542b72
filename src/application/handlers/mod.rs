//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{
    DerivePairwiseWeightsCommand, DerivePairwiseWeightsHandler, GetTierWeightsHandler,
    GetTierWeightsQuery, RankCarriersCommand, RankCarriersError, RankCarriersHandler,
    RankCarriersResult, REQUEST_DATA_SOURCE,
};
