//! Candidate source that falls back when the primary has nothing to offer.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::ranking::RawCandidate;
use crate::ports::{CandidateSource, CandidateSourceError, ShipmentRoute};

/// Queries `primary` first and `fallback` when the primary fails or
/// returns no candidates.
pub struct FallbackCandidateSource {
    primary: Arc<dyn CandidateSource>,
    fallback: Arc<dyn CandidateSource>,
}

impl FallbackCandidateSource {
    pub fn new(primary: Arc<dyn CandidateSource>, fallback: Arc<dyn CandidateSource>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl CandidateSource for FallbackCandidateSource {
    async fn fetch_candidates(
        &self,
        route: &ShipmentRoute,
    ) -> Result<Vec<RawCandidate>, CandidateSourceError> {
        match self.primary.fetch_candidates(route).await {
            Ok(candidates) if !candidates.is_empty() => return Ok(candidates),
            Ok(_) => debug!(
                primary = self.primary.name(),
                fallback = self.fallback.name(),
                "Primary candidate source returned nothing, using fallback"
            ),
            Err(error) => warn!(
                primary = self.primary.name(),
                fallback = self.fallback.name(),
                %error,
                "Primary candidate source failed, using fallback"
            ),
        }

        self.fallback.fetch_candidates(route).await
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::candidates::StaticCandidateSource;

    struct FailingSource;

    #[async_trait]
    impl CandidateSource for FailingSource {
        async fn fetch_candidates(
            &self,
            _route: &ShipmentRoute,
        ) -> Result<Vec<RawCandidate>, CandidateSourceError> {
            Err(CandidateSourceError::Unavailable("Simulated failure".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn single(id: &str) -> Arc<dyn CandidateSource> {
        Arc::new(StaticCandidateSource::with_candidates(vec![RawCandidate::new(
            id, id, 1000.0, 10.0, 0.9, true,
        )]))
    }

    #[tokio::test]
    async fn uses_primary_when_it_has_candidates() {
        let source = FallbackCandidateSource::new(single("primary"), single("fallback"));
        let candidates = source.fetch_candidates(&ShipmentRoute::default()).await.unwrap();
        assert_eq!(candidates[0].id.as_deref(), Some("primary"));
    }

    #[tokio::test]
    async fn uses_fallback_when_primary_is_empty() {
        let empty: Arc<dyn CandidateSource> =
            Arc::new(StaticCandidateSource::with_candidates(Vec::new()));
        let source = FallbackCandidateSource::new(empty, single("fallback"));
        let candidates = source.fetch_candidates(&ShipmentRoute::default()).await.unwrap();
        assert_eq!(candidates[0].id.as_deref(), Some("fallback"));
    }

    #[tokio::test]
    async fn uses_fallback_when_primary_fails() {
        let source = FallbackCandidateSource::new(Arc::new(FailingSource), single("fallback"));
        let candidates = source.fetch_candidates(&ShipmentRoute::default()).await.unwrap();
        assert_eq!(candidates.len(), 1);
    }

    #[tokio::test]
    async fn propagates_fallback_failure() {
        let source = FallbackCandidateSource::new(Arc::new(FailingSource), Arc::new(FailingSource));
        let result = source.fetch_candidates(&ShipmentRoute::default()).await;
        assert!(matches!(result, Err(CandidateSourceError::Unavailable(_))));
    }
}
