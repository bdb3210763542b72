use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::ranking::RawCandidate;

/// Route a shipment travels, used to select candidate quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRoute {
    pub origin: String,
    pub destination: String,
    pub cargo_type: Option<String>,
}

impl ShipmentRoute {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            cargo_type: None,
        }
    }

    /// Case-insensitive match on origin and destination, ignoring
    /// surrounding whitespace on both sides.
    pub fn matches(&self, origin: &str, destination: &str) -> bool {
        self.origin.trim().eq_ignore_ascii_case(origin.trim())
            && self.destination.trim().eq_ignore_ascii_case(destination.trim())
    }
}

/// Read-only port supplying carrier quotes for a route.
///
/// The engine treats each result as an immutable snapshot; freshness is the
/// source's concern.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Returns the raw quotes available for a route. An empty list is not an error.
    async fn fetch_candidates(
        &self,
        route: &ShipmentRoute,
    ) -> Result<Vec<RawCandidate>, CandidateSourceError>;

    /// Short name used in logs and responses.
    fn name(&self) -> &'static str;
}

/// Errors that can occur while fetching candidates
#[derive(Debug, thiserror::Error)]
pub enum CandidateSourceError {
    #[error("Candidate source unavailable: {0}")]
    Unavailable(String),

    #[error("Candidate data malformed: {0}")]
    Malformed(String),
}

impl From<std::io::Error> for CandidateSourceError {
    fn from(err: std::io::Error) -> Self {
        CandidateSourceError::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for CandidateSourceError {
    fn from(err: serde_json::Error) -> Self {
        CandidateSourceError::Malformed(err.to_string())
    }
}
