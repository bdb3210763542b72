//! HTTP DTOs for ranking endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;
use crate::domain::ranking::{
    CandidateEntry, RankedResult, RankingOutcome, RawCandidate, RejectedCandidate, ScoringMethod,
    SensitivityAnalysis, WeightVector,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/rankings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankCarriersRequest {
    pub urgency_tier: String,
    /// Validated by the handler so an out-of-range depth is a 400.
    #[serde(default)]
    pub analysis_depth: Option<i64>,
    /// Read one by one so a malformed entry rejects only itself.
    #[serde(default)]
    pub candidates: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub cargo_type: Option<String>,
    #[serde(default)]
    pub criteria_pairwise: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    pub include_commentary: bool,
}

impl RankCarriersRequest {
    /// Inline candidates, each read independently.
    pub fn candidate_entries(&mut self) -> Option<Vec<CandidateEntry>> {
        self.candidates.take().map(|values| {
            values
                .into_iter()
                .enumerate()
                .map(|(index, value)| RawCandidate::from_json(value, index))
                .collect()
        })
    }
}

/// Body of `POST /api/weights/pairwise`.
#[derive(Debug, Clone, Deserialize)]
pub struct PairwiseWeightsRequest {
    pub matrix: Vec<Vec<f64>>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One ranked carrier.
///
/// Analysis fields are omitted, not null, below their depth.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResultResponse {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub rank: usize,
    pub cost: f64,
    pub delivery_time: f64,
    pub reliability: f64,
    pub has_tracking: bool,
    pub cost_factor: f64,
    pub time_factor: f64,
    pub reliability_factor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criterion_contributions: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity_analysis: Option<SensitivityAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separation_ideal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separation_negative: Option<f64>,
}

impl From<&RankedResult> for RankedResultResponse {
    fn from(result: &RankedResult) -> Self {
        let n = &result.normalized;
        Self {
            id: n.candidate.id.clone(),
            name: n.candidate.name.clone(),
            score: result.score,
            rank: result.rank,
            cost: n.candidate.cost,
            delivery_time: n.candidate.delivery_time,
            reliability: n.candidate.reliability,
            has_tracking: n.candidate.has_tracking,
            cost_factor: n.cost_factor,
            time_factor: n.time_factor,
            reliability_factor: n.reliability_factor,
            criterion_contributions: result.criterion_contributions.map(|c| c.0),
            sensitivity_analysis: result.sensitivity_analysis.clone(),
            separation_ideal: result.separation.map(|s| s.ideal),
            separation_negative: result.separation.map(|s| s.negative),
        }
    }
}

/// A submitted carrier that was excluded from ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedCandidateResponse {
    pub id: String,
    pub code: ErrorCode,
    pub reason: String,
}

impl From<&RejectedCandidate> for RejectedCandidateResponse {
    fn from(rejected: &RejectedCandidate) -> Self {
        Self {
            id: rejected.id.clone(),
            code: rejected.error.code(),
            reason: rejected.error.to_string(),
        }
    }
}

/// Body returned by `POST /api/rankings`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub weights: WeightVector,
    pub scoring_method: ScoringMethod,
    pub analysis_depth: u8,
    pub results: Vec<RankedResultResponse>,
    pub rejected: Vec<RejectedCandidateResponse>,
    pub data_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}

impl RankingResponse {
    pub fn new(outcome: &RankingOutcome, data_source: String, commentary: Option<String>) -> Self {
        Self {
            weights: outcome.weights,
            scoring_method: outcome.scoring_method,
            analysis_depth: outcome.analysis_depth.value(),
            results: outcome.results.iter().map(RankedResultResponse::from).collect(),
            rejected: outcome.rejected.iter().map(RejectedCandidateResponse::from).collect(),
            data_source,
            commentary,
        }
    }
}

/// Body returned by the weight endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct WeightsResponse {
    pub source: String,
    pub weights: WeightVector,
}

/// Body returned by `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
