//! Candidate source backed by a JSON file of forwarders and their routes.
//!
//! File format:
//!
//! ```json
//! [
//!   {
//!     "id": "f1", "name": "AfricaLogistics",
//!     "cost": 1200, "time": 14, "reliability": 0.85, "tracking": true,
//!     "routes": [
//!       { "origin": "Kenya", "destination": "DR Congo", "cost": 1250 }
//!     ]
//!   }
//! ]
//! ```
//!
//! A forwarder is returned once per matching route, with the route's fields
//! overriding the forwarder's own. Forwarders without a matching route are
//! skipped, and so is any record that cannot be read (with a warning); only a
//! file that is not a JSON array fails the fetch.

use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::domain::ranking::RawCandidate;
use crate::ports::{CandidateSource, CandidateSourceError, ShipmentRoute};

#[derive(Debug, Deserialize)]
struct ForwarderRecord {
    #[serde(flatten)]
    base: RawCandidate,
    #[serde(default)]
    routes: Vec<RouteRecord>,
}

#[derive(Debug, Deserialize)]
struct RouteRecord {
    origin: String,
    destination: String,
    #[serde(flatten)]
    overrides: RawCandidate,
}

/// Reads forwarders from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileCandidateSource {
    path: PathBuf,
}

impl JsonFileCandidateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(&self, contents: &str) -> Result<Vec<ForwarderRecord>, CandidateSourceError> {
        let values: Vec<serde_json::Value> = serde_json::from_str(contents)?;
        let records = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(error) => {
                    warn!(
                        path = %self.path.display(),
                        index,
                        %error,
                        "Skipping unreadable forwarder record"
                    );
                    None
                }
            })
            .collect();
        Ok(records)
    }

    fn select(records: Vec<ForwarderRecord>, route: &ShipmentRoute) -> Vec<RawCandidate> {
        let mut candidates = Vec::new();
        for record in records {
            for route_record in &record.routes {
                if route.matches(&route_record.origin, &route_record.destination) {
                    candidates.push(overlay(&record.base, &route_record.overrides));
                }
            }
        }
        candidates
    }
}

/// Fields present in `overrides` replace those in `base`.
fn overlay(base: &RawCandidate, overrides: &RawCandidate) -> RawCandidate {
    RawCandidate {
        id: overrides.id.clone().or_else(|| base.id.clone()),
        name: overrides.name.clone().or_else(|| base.name.clone()),
        cost: overrides.cost.or(base.cost),
        delivery_time: overrides.delivery_time.or(base.delivery_time),
        reliability: overrides.reliability.or(base.reliability),
        has_tracking: overrides.has_tracking.or(base.has_tracking),
    }
}

#[async_trait]
impl CandidateSource for JsonFileCandidateSource {
    async fn fetch_candidates(
        &self,
        route: &ShipmentRoute,
    ) -> Result<Vec<RawCandidate>, CandidateSourceError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Forwarder file not found");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let records = self.parse(&contents)?;
        let candidates = Self::select(records, route);
        debug!(
            path = %self.path.display(),
            origin = %route.origin,
            destination = %route.destination,
            count = candidates.len(),
            "Loaded forwarders for route"
        );
        Ok(candidates)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FORWARDERS: &str = r#"[
        {
            "id": "f1", "name": "AfricaLogistics",
            "cost": 1200, "time": 14, "reliability": 0.85, "tracking": true,
            "routes": [
                { "origin": "Kenya", "destination": "DR Congo", "cost": 1250 },
                { "origin": "Kenya", "destination": "Uganda" }
            ]
        },
        {
            "id": "f2", "name": "GlobalFreight",
            "cost": 950, "time": 18, "reliability": 78, "tracking": false,
            "routes": [
                { "origin": "Kenya", "destination": "DR Congo", "time": 16 }
            ]
        },
        {
            "id": "f9", "name": "NoRoutes",
            "cost": 800, "time": 9, "reliability": 0.9, "tracking": true
        }
    ]"#;

    fn forwarder_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn returns_forwarders_matching_route_with_overrides() {
        let file = forwarder_file(FORWARDERS);
        let source = JsonFileCandidateSource::new(file.path());

        let candidates = source
            .fetch_candidates(&ShipmentRoute::new("Kenya", "DR Congo"))
            .await
            .unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id.as_deref(), Some("f1"));
        assert_eq!(candidates[0].cost, Some(1250.0));
        assert_eq!(candidates[0].delivery_time, Some(14.0));
        assert_eq!(candidates[1].delivery_time, Some(16.0));
        assert_eq!(candidates[1].reliability, Some(78.0));
    }

    #[tokio::test]
    async fn unmatched_route_returns_empty() {
        let file = forwarder_file(FORWARDERS);
        let source = JsonFileCandidateSource::new(file.path());

        let candidates = source
            .fetch_candidates(&ShipmentRoute::new("Ghana", "Togo"))
            .await
            .unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileCandidateSource::new(dir.path().join("absent.json"));

        let candidates = source
            .fetch_candidates(&ShipmentRoute::new("Kenya", "DR Congo"))
            .await
            .unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let file = forwarder_file("{ not json");
        let source = JsonFileCandidateSource::new(file.path());

        let result = source
            .fetch_candidates(&ShipmentRoute::new("Kenya", "DR Congo"))
            .await;
        assert!(matches!(result, Err(CandidateSourceError::Malformed(_))));
    }

    #[tokio::test]
    async fn unreadable_record_is_skipped_not_fatal() {
        let file = forwarder_file(
            r#"[
                { "id": "f1", "name": "Good", "cost": 1200, "time": 14, "reliability": 0.85, "tracking": true,
                  "routes": [{ "origin": "Kenya", "destination": "DR Congo" }] },
                { "id": "f2", "name": "Bad", "cost": "cheap",
                  "routes": [{ "origin": "Kenya", "destination": "DR Congo" }] }
            ]"#,
        );
        let source = JsonFileCandidateSource::new(file.path());

        let candidates = source
            .fetch_candidates(&ShipmentRoute::new("Kenya", "DR Congo"))
            .await
            .unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id.as_deref(), Some("f1"));
    }

    #[test]
    fn overlay_prefers_override_fields() {
        let base = RawCandidate::new("f1", "Base", 100.0, 5.0, 0.5, false);
        let overrides = RawCandidate {
            cost: Some(120.0),
            has_tracking: Some(true),
            ..RawCandidate::default()
        };

        let merged = overlay(&base, &overrides);
        assert_eq!(merged.cost, Some(120.0));
        assert_eq!(merged.has_tracking, Some(true));
        assert_eq!(merged.name.as_deref(), Some("Base"));
    }
}
