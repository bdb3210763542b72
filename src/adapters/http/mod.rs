//! HTTP adapters - REST API implementations.

pub mod ranking;

use axum::Router;
use http::{header, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, ValidationError};

pub use ranking::{ranking_routes, RankingAppState};

/// Builds the full application router with middleware.
///
/// CORS is only layered on when origins are configured.
pub fn app_router(
    state: RankingAppState,
    server: &ServerConfig,
) -> Result<Router, ValidationError> {
    let origins = server.cors_header_values()?;

    let mut router = ranking_routes(state)
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)));

    if !origins.is_empty() {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }

    Ok(router.layer(TraceLayer::new_for_http()))
}
