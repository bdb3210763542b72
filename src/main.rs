//! Carrier Ranker HTTP server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use carrier_ranker::adapters::candidates::{
    FallbackCandidateSource, JsonFileCandidateSource, StaticCandidateSource,
};
use carrier_ranker::adapters::http::{app_router, RankingAppState};
use carrier_ranker::adapters::narrative::TemplateNarrator;
use carrier_ranker::config::{AppConfig, CandidatesConfig, LogFormat, ServerConfig};
use carrier_ranker::ports::CandidateSource;

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match server.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn build_candidate_source(config: &CandidatesConfig) -> Arc<dyn CandidateSource> {
    match &config.data_path {
        Some(path) if config.fallback => Arc::new(FallbackCandidateSource::new(
            Arc::new(JsonFileCandidateSource::new(path)),
            Arc::new(StaticCandidateSource::fallback()),
        )),
        Some(path) => Arc::new(JsonFileCandidateSource::new(path)),
        None => Arc::new(StaticCandidateSource::fallback()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server);

    let engine = config.engine.build_engine()?;
    let candidate_source = build_candidate_source(&config.candidates);
    info!(
        candidate_source = candidate_source.name(),
        sensitivity_mode = ?engine.sensitivity_mode(),
        scoring_method = engine.scoring_method().as_str(),
        environment = ?config.server.environment,
        "Starting carrier ranker"
    );

    let state = RankingAppState::new(engine, candidate_source, Arc::new(TemplateNarrator::new()));
    let app = app_router(state, &config.server)?;

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}
