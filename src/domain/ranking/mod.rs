//! Ranking Module - Pure multi-criteria ranking and sensitivity engine.
//!
//! Turns raw carrier quotes plus an urgency tier into normalized factors,
//! composite scores, ranks, per-criterion contributions and weight
//! sensitivity deltas.
//!
//! # Components
//!
//! - `WeightResolver` - Urgency tier to fixed weight vector
//! - `PairwiseMatrix` - Analytic-hierarchy weight derivation (separate path)
//! - `Normalizer` - Ingestion, validation and [0, 1] normalization
//! - `Scorer` - Weighted, direction-corrected composite score
//! - `TopsisScorer` - Batch-relative closeness to the ideal (alternative model)
//! - `Ranker` - Stable descending ordering
//! - `ContributionAnalyzer` / `SensitivityAnalyzer` - Explanation of a score
//! - `RankingEngine` - The pipeline every caller goes through
//!
//! All functions are pure (no side effects beyond tracing) and stateless.

mod candidate;
mod engine;
mod errors;
mod normalizer;
mod pairwise;
mod ranker;
mod scorer;
mod sensitivity;
mod topsis;
mod weights;

pub use candidate::{Candidate, CandidateEntry, RawCandidate, RELIABILITY_PERCENT_THRESHOLD};
pub use engine::{RankedResult, RankingEngine, RankingOutcome, RankingRequest};
pub use errors::RankingError;
pub use normalizer::{
    ClampEvent, Normalization, NormalizationParams, NormalizedCandidate, Normalizer,
    RejectedCandidate,
};
pub use pairwise::PairwiseMatrix;
pub use ranker::{RankedCandidate, Ranker, ScoredCandidate};
pub use scorer::Scorer;
pub use sensitivity::{
    ContributionAnalyzer, CriterionContributions, SensitivityAnalysis, SensitivityAnalyzer,
    SensitivityMode, PERTURBATIONS,
};
pub use topsis::{ScoringMethod, Separation, TopsisEvaluation, TopsisScorer, NEUTRAL_CLOSENESS};
pub use weights::{
    WeightResolver, WeightVector, EXPRESS_WEIGHTS, RUSH_WEIGHTS, STANDARD_WEIGHTS,
};
