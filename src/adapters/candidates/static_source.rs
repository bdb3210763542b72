//! Built-in fallback dataset of carrier quotes.

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::domain::ranking::RawCandidate;
use crate::ports::{CandidateSource, CandidateSourceError, ShipmentRoute};

static FALLBACK_CANDIDATES: Lazy<Vec<RawCandidate>> = Lazy::new(|| {
    vec![
        RawCandidate::new("f1", "AfricaLogistics", 1200.0, 14.0, 0.85, true),
        RawCandidate::new("f2", "GlobalFreight", 950.0, 18.0, 0.78, false),
        RawCandidate::new("f3", "ExpressShip", 1450.0, 10.0, 0.92, true),
        RawCandidate::new("f4", "TransAfrica", 1100.0, 15.0, 0.82, true),
        RawCandidate::new("f5", "FastCargo", 1350.0, 12.0, 0.88, false),
    ]
});

/// Candidate source serving a fixed dataset for every route.
#[derive(Debug, Clone)]
pub struct StaticCandidateSource {
    candidates: Vec<RawCandidate>,
}

impl StaticCandidateSource {
    /// Serves the built-in five-carrier dataset.
    pub fn fallback() -> Self {
        Self {
            candidates: FALLBACK_CANDIDATES.clone(),
        }
    }

    /// Serves the given records.
    pub fn with_candidates(candidates: Vec<RawCandidate>) -> Self {
        Self { candidates }
    }
}

impl Default for StaticCandidateSource {
    fn default() -> Self {
        Self::fallback()
    }
}

#[async_trait]
impl CandidateSource for StaticCandidateSource {
    async fn fetch_candidates(
        &self,
        _route: &ShipmentRoute,
    ) -> Result<Vec<RawCandidate>, CandidateSourceError> {
        Ok(self.candidates.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
