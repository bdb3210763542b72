//! RankCarriersHandler - Command handler for ranking carrier quotes.
//!
//! Candidates come from the request when supplied, and from the configured
//! candidate source otherwise.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::foundation::AnalysisDepth;
use crate::domain::ranking::{
    CandidateEntry, RankingEngine, RankingError, RankingOutcome, WeightResolver,
};
use crate::ports::{CandidateSource, CandidateSourceError, NarrativeGenerator, ShipmentRoute};

/// Data source label for candidates supplied inline.
pub const REQUEST_DATA_SOURCE: &str = "request";

/// Command to rank carriers for a shipment.
#[derive(Debug, Clone)]
pub struct RankCarriersCommand {
    pub urgency_tier: String,
    pub analysis_depth: AnalysisDepth,
    /// Inline candidates; when `None` the candidate source is queried.
    pub candidates: Option<Vec<CandidateEntry>>,
    pub route: ShipmentRoute,
    /// Accepted for compatibility. Ranking always uses the tier's weights.
    pub criteria_pairwise: Option<Vec<Vec<f64>>>,
    pub include_commentary: bool,
}

/// Result of a successful ranking.
#[derive(Debug, Clone)]
pub struct RankCarriersResult {
    pub outcome: RankingOutcome,
    pub data_source: String,
    pub commentary: Option<String>,
}

/// Errors from ranking carriers.
#[derive(Debug, thiserror::Error)]
pub enum RankCarriersError {
    #[error(transparent)]
    Ranking(#[from] RankingError),

    #[error(transparent)]
    Source(#[from] CandidateSourceError),
}

/// Handler for ranking carriers.
pub struct RankCarriersHandler {
    engine: RankingEngine,
    candidate_source: Arc<dyn CandidateSource>,
    narrator: Arc<dyn NarrativeGenerator>,
}

impl RankCarriersHandler {
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

    pub async fn handle(
        &self,
        cmd: RankCarriersCommand,
    ) -> Result<RankCarriersResult, RankCarriersError> {
        // Resolve before fetching so an unknown tier never touches the source
        let weights = WeightResolver::resolve(&cmd.urgency_tier)?;

        if cmd.criteria_pairwise.is_some() {
            debug!("Pairwise matrix supplied with ranking request; using tier weights");
        }

        let (candidates, data_source) = match cmd.candidates {
            Some(candidates) => (candidates, REQUEST_DATA_SOURCE.to_string()),
            None => {
                let candidates = self.candidate_source.fetch_candidates(&cmd.route).await?;
                (
                    candidates.into_iter().map(Ok).collect(),
                    self.candidate_source.name().to_string(),
                )
            }
        };

        let outcome = self
            .engine
            .rank_entries(weights, candidates, cmd.analysis_depth);

        info!(
            urgency_tier = %cmd.urgency_tier.trim().to_lowercase(),
            data_source = %data_source,
            ranked = outcome.results.len(),
            rejected = outcome.rejected.len(),
            winner = outcome.winner().map(|w| w.id()).unwrap_or("none"),
            "Ranked carriers"
        );

        let commentary = cmd
            .include_commentary
            .then(|| self.narrator.narrate(&outcome));

        Ok(RankCarriersResult {
            outcome,
            data_source,
            commentary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::{RawCandidate, RUSH_WEIGHTS, STANDARD_WEIGHTS};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementations
    // ─────────────────────────────────────────────────────────────────────

    struct MockCandidateSource {
        candidates: Vec<RawCandidate>,
        should_fail: bool,
        calls: AtomicUsize,
    }

    impl MockCandidateSource {
        fn with_candidates(candidates: Vec<RawCandidate>) -> Self {
            Self {
                candidates,
                should_fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                candidates: Vec::new(),
                should_fail: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CandidateSource for MockCandidateSource {
        async fn fetch_candidates(
            &self,
            _route: &ShipmentRoute,
        ) -> Result<Vec<RawCandidate>, CandidateSourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.should_fail {
                return Err(CandidateSourceError::Unavailable("Simulated failure".to_string()));
            }
            Ok(self.candidates.clone())
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    struct FixedNarrator;

    impl NarrativeGenerator for FixedNarrator {
        fn narrate(&self, outcome: &RankingOutcome) -> String {
            format!("{} ranked", outcome.results.len())
        }
    }

    fn reference_candidates() -> Vec<RawCandidate> {
        vec![
            RawCandidate::new("f1", "AfricaLogistics", 1200.0, 14.0, 0.85, true),
            RawCandidate::new("f2", "GlobalFreight", 950.0, 18.0, 0.78, false),
            RawCandidate::new("f3", "ExpressShip", 1450.0, 10.0, 0.92, true),
        ]
    }

    fn command(tier: &str, candidates: Option<Vec<RawCandidate>>) -> RankCarriersCommand {
        RankCarriersCommand {
            urgency_tier: tier.to_string(),
            analysis_depth: AnalysisDepth::MAX,
            candidates: candidates.map(|c| c.into_iter().map(Ok).collect()),
            route: ShipmentRoute::new("Kenya", "DR Congo"),
            criteria_pairwise: None,
            include_commentary: false,
        }
    }

    fn handler(source: Arc<MockCandidateSource>) -> RankCarriersHandler {
        RankCarriersHandler::new(RankingEngine::default(), source, Arc::new(FixedNarrator))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn ranks_inline_candidates_without_querying_source() {
        let source = Arc::new(MockCandidateSource::with_candidates(Vec::new()));
        let result = handler(source.clone())
            .handle(command("standard", Some(reference_candidates())))
            .await
            .unwrap();

        assert_eq!(result.data_source, REQUEST_DATA_SOURCE);
        assert_eq!(result.outcome.weights, STANDARD_WEIGHTS);
        assert_eq!(result.outcome.winner().unwrap().id(), "f1");
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn queries_source_when_candidates_absent() {
        let source = Arc::new(MockCandidateSource::with_candidates(reference_candidates()));
        let result = handler(source.clone())
            .handle(command("rush", None))
            .await
            .unwrap();

        assert_eq!(result.data_source, "mock");
        assert_eq!(result.outcome.weights, RUSH_WEIGHTS);
        assert_eq!(result.outcome.winner().unwrap().id(), "f3");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_tier_fails_before_querying_source() {
        let source = Arc::new(MockCandidateSource::with_candidates(reference_candidates()));
        let result = handler(source.clone()).handle(command("overnight", None)).await;

        assert!(matches!(
            result,
            Err(RankCarriersError::Ranking(RankingError::UnknownUrgencyTier(_)))
        ));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn source_failure_is_propagated() {
        let source = Arc::new(MockCandidateSource::failing());
        let result = handler(source).handle(command("standard", None)).await;
        assert!(matches!(result, Err(RankCarriersError::Source(_))));
    }

    #[tokio::test]
    async fn commentary_only_when_requested() {
        let source = Arc::new(MockCandidateSource::with_candidates(Vec::new()));
        let handler = handler(source);

        let without = handler
            .handle(command("standard", Some(reference_candidates())))
            .await
            .unwrap();
        assert!(without.commentary.is_none());

        let mut cmd = command("standard", Some(reference_candidates()));
        cmd.include_commentary = true;
        let with = handler.handle(cmd).await.unwrap();
        assert_eq!(with.commentary.as_deref(), Some("3 ranked"));
    }

    #[tokio::test]
    async fn malformed_inline_entry_is_rejected_not_fatal() {
        let source = Arc::new(MockCandidateSource::with_candidates(Vec::new()));
        let mut cmd = command("standard", Some(reference_candidates()));
        if let Some(entries) = cmd.candidates.as_mut() {
            let malformed = serde_json::json!({"id": "f4", "cost": "cheap"});
            entries.push(RawCandidate::from_json(malformed, 3));
        }

        let result = handler(source).handle(cmd).await.unwrap();
        assert_eq!(result.outcome.results.len(), 3);
        assert_eq!(result.outcome.rejected.len(), 1);
        assert_eq!(result.outcome.rejected[0].id, "f4");
    }

    #[tokio::test]
    async fn pairwise_matrix_does_not_change_weights() {
        let source = Arc::new(MockCandidateSource::with_candidates(Vec::new()));
        let mut cmd = command("express", Some(reference_candidates()));
        cmd.criteria_pairwise = Some(vec![vec![1.0; 4]; 4]);

        let result = handler(source).handle(cmd).await.unwrap();
        assert_eq!(result.outcome.weights, WeightResolver::resolve("express").unwrap());
    }
}
