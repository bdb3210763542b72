//! Ranking engine errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, UnknownTier};

/// Errors raised while resolving weights or ingesting candidates.
///
/// `UnknownUrgencyTier` and `InvalidPairwiseMatrix` are fatal for a request.
/// The candidate-level variants only ever reject a single candidate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("Unknown urgency tier: '{0}' (expected standard, express or rush)")]
    UnknownUrgencyTier(String),

    #[error("Candidate '{id}' is missing required metric '{field}'")]
    IncompleteCandidate { id: String, field: &'static str },

    #[error("Candidate '{id}' has invalid {field}: {value}")]
    InvalidMetric {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("Candidate '{id}' could not be read: {reason}")]
    MalformedCandidate { id: String, reason: String },

    #[error("Candidate id '{id}' appears more than once")]
    DuplicateCandidate { id: String },

    #[error("Invalid pairwise comparison matrix: {0}")]
    InvalidPairwiseMatrix(String),
}

impl RankingError {
    pub fn incomplete(id: impl Into<String>, field: &'static str) -> Self {
        RankingError::IncompleteCandidate {
            id: id.into(),
            field,
        }
    }

    pub fn invalid_metric(id: impl Into<String>, field: &'static str, value: f64) -> Self {
        RankingError::InvalidMetric {
            id: id.into(),
            field,
            value,
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::UnknownUrgencyTier(_) => ErrorCode::UnknownUrgencyTier,
            RankingError::IncompleteCandidate { .. } => ErrorCode::IncompleteCandidate,
            RankingError::InvalidMetric { .. } => ErrorCode::InvalidMetric,
            RankingError::MalformedCandidate { .. } => ErrorCode::MalformedCandidate,
            RankingError::DuplicateCandidate { .. } => ErrorCode::DuplicateCandidate,
            RankingError::InvalidPairwiseMatrix(_) => ErrorCode::InvalidPairwiseMatrix,
        }
    }
}

impl From<UnknownTier> for RankingError {
    fn from(err: UnknownTier) -> Self {
        RankingError::UnknownUrgencyTier(err.0)
    }
}
