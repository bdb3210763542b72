//! HTTP handlers for ranking endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::application::handlers::{
    DerivePairwiseWeightsCommand, DerivePairwiseWeightsHandler, GetTierWeightsHandler,
    GetTierWeightsQuery, RankCarriersCommand, RankCarriersError, RankCarriersHandler,
};
use crate::domain::foundation::{AnalysisDepth, ErrorCode, UrgencyTier, ValidationError};
use crate::domain::ranking::{RankingEngine, RankingError};
use crate::ports::{CandidateSource, CandidateSourceError, NarrativeGenerator, ShipmentRoute};

use super::dto::{
    ErrorResponse, HealthResponse, PairwiseWeightsRequest, RankCarriersRequest, RankingResponse,
    WeightsResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Ranking API error that implements IntoResponse.
#[derive(Debug)]
pub enum RankingApiError {
    BadRequest(ErrorCode, String),
    UnknownTier(String),
    BadGateway(String),
    Internal(String),
}

impl IntoResponse for RankingApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            RankingApiError::BadRequest(code, msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(code, msg))
            }
            RankingApiError::UnknownTier(msg) => {
                let allowed: Vec<&str> = UrgencyTier::ALL.iter().map(|t| t.as_str()).collect();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(ErrorCode::UnknownUrgencyTier, msg)
                        .with_details(serde_json::json!({ "allowed": allowed })),
                )
            }
            RankingApiError::BadGateway(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new(ErrorCode::CandidateSourceUnavailable, msg),
            ),
            RankingApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<RankingError> for RankingApiError {
    fn from(error: RankingError) -> Self {
        match &error {
            RankingError::UnknownUrgencyTier(_) => RankingApiError::UnknownTier(error.to_string()),
            _ => RankingApiError::BadRequest(error.code(), error.to_string()),
        }
    }
}

impl From<JsonRejection> for RankingApiError {
    fn from(rejection: JsonRejection) -> Self {
        RankingApiError::BadRequest(ErrorCode::ValidationFailed, rejection.body_text())
    }
}

impl From<ValidationError> for RankingApiError {
    fn from(error: ValidationError) -> Self {
        RankingApiError::BadRequest(ErrorCode::from(&error), error.to_string())
    }
}

impl From<RankCarriersError> for RankingApiError {
    fn from(error: RankCarriersError) -> Self {
        match error {
            RankCarriersError::Ranking(err) => err.into(),
            RankCarriersError::Source(err @ CandidateSourceError::Unavailable(_)) => {
                RankingApiError::BadGateway(err.to_string())
            }
            RankCarriersError::Source(err @ CandidateSourceError::Malformed(_)) => {
                RankingApiError::Internal(err.to_string())
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing ranking dependencies.
#[derive(Clone)]
pub struct RankingAppState {
    pub engine: RankingEngine,
    pub candidate_source: Arc<dyn CandidateSource>,
    pub narrator: Arc<dyn NarrativeGenerator>,
}

impl RankingAppState {
    pub fn new(
        engine: RankingEngine,
        candidate_source: Arc<dyn CandidateSource>,
        narrator: Arc<dyn NarrativeGenerator>,
    ) -> Self {
        Self {
            engine,
            candidate_source,
            narrator,
        }
    }

    pub fn rank_carriers_handler(&self) -> RankCarriersHandler {
        RankCarriersHandler::new(
            self.engine,
            self.candidate_source.clone(),
            self.narrator.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/rankings
///
/// Ranks inline candidates, or the candidate source's quotes for the route.
pub async fn rank_carriers(
    State(state): State<RankingAppState>,
    payload: Result<Json<RankCarriersRequest>, JsonRejection>,
) -> Result<Json<RankingResponse>, RankingApiError> {
    let Json(request) = payload?;
    let request_id = Uuid::new_v4();
    let span = info_span!("rank_carriers", %request_id, urgency_tier = %request.urgency_tier);
    rank_carriers_in_span(state, request).instrument(span).await
}

async fn rank_carriers_in_span(
    state: RankingAppState,
    mut request: RankCarriersRequest,
) -> Result<Json<RankingResponse>, RankingApiError> {
    let analysis_depth = match request.analysis_depth {
        Some(depth) => AnalysisDepth::try_from(depth)?,
        None => AnalysisDepth::default(),
    };
    let candidates = request.candidate_entries();

    let route = ShipmentRoute {
        origin: request.origin.unwrap_or_default(),
        destination: request.destination.unwrap_or_default(),
        cargo_type: request.cargo_type,
    };

    let cmd = RankCarriersCommand {
        urgency_tier: request.urgency_tier,
        analysis_depth,
        candidates,
        route,
        criteria_pairwise: request.criteria_pairwise,
        include_commentary: request.include_commentary,
    };

    let handler = state.rank_carriers_handler();
    let result = handler.handle(cmd).await.map_err(|err| {
        warn!(error = %err, "Ranking request failed");
        RankingApiError::from(err)
    })?;

    info!(
        ranked = result.outcome.results.len(),
        rejected = result.outcome.rejected.len(),
        "Ranking request completed"
    );

    Ok(Json(RankingResponse::new(
        &result.outcome,
        result.data_source,
        result.commentary,
    )))
}

/// GET /api/weights/:tier
///
/// Returns the fixed weight vector for an urgency tier.
pub async fn get_tier_weights(
    Path(tier): Path<String>,
) -> Result<Json<WeightsResponse>, RankingApiError> {
    let weights = GetTierWeightsHandler::new().handle(GetTierWeightsQuery {
        urgency_tier: tier.clone(),
    })?;

    Ok(Json(WeightsResponse {
        source: tier.trim().to_lowercase(),
        weights,
    }))
}

/// POST /api/weights/pairwise
///
/// Derives weights from a pairwise comparison matrix. The result is
/// informational and is not used by `POST /api/rankings`.
pub async fn derive_pairwise_weights(
    payload: Result<Json<PairwiseWeightsRequest>, JsonRejection>,
) -> Result<Json<WeightsResponse>, RankingApiError> {
    let Json(request) = payload?;
    let weights = DerivePairwiseWeightsHandler::new().handle(DerivePairwiseWeightsCommand {
        matrix: request.matrix,
    })?;

    Ok(Json(WeightsResponse {
        source: "pairwise".to_string(),
        weights,
    }))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tier_maps_to_bad_request() {
        let error: RankingApiError = RankingError::UnknownUrgencyTier("slow".to_string()).into();
        assert!(matches!(error, RankingApiError::UnknownTier(_)));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unavailable_source_maps_to_bad_gateway() {
        let error: RankingApiError =
            RankCarriersError::Source(CandidateSourceError::Unavailable("down".to_string())).into();
        assert_eq!(error.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn malformed_source_maps_to_internal_error() {
        let error: RankingApiError =
            RankCarriersError::Source(CandidateSourceError::Malformed("bad".to_string())).into();
        assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn out_of_range_depth_maps_to_bad_request() {
        let error: RankingApiError = AnalysisDepth::try_new(9).unwrap_err().into();
        assert!(matches!(error, RankingApiError::BadRequest(ErrorCode::OutOfRange, _)));
    }

    #[test]
    fn pairwise_error_keeps_its_code() {
        let error: RankingApiError =
            RankingError::InvalidPairwiseMatrix("not square".to_string()).into();
        assert!(matches!(
            error,
            RankingApiError::BadRequest(ErrorCode::InvalidPairwiseMatrix, _)
        ));
    }
}
