//! HTTP routes for ranking endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    derive_pairwise_weights, get_tier_weights, health, rank_carriers, RankingAppState,
};

/// Creates the ranking router with all routes.
pub fn ranking_routes(state: RankingAppState) -> Router {
    Router::new()
        // POST /api/rankings
        .route("/api/rankings", post(rank_carriers))
        // POST /api/weights/pairwise
        .route("/api/weights/pairwise", post(derive_pairwise_weights))
        // GET /api/weights/:tier
        .route("/api/weights/:tier", get(get_tier_weights))
        // GET /health
        .route("/health", get(health))
        .with_state(state)
}
