//! Candidate - One carrier quote subject to ranking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{RankingError, RejectedCandidate};

/// Reliability at or above this value is read as a percentage.
///
/// Values between 1 and this threshold are treated as out-of-range fractions
/// and clamped during normalization, so that 1.02 means "about 1", not 1.02%.
pub const RELIABILITY_PERCENT_THRESHOLD: f64 = 2.0;

/// One submitted record: readable, or already rejected.
pub type CandidateEntry = Result<RawCandidate, RejectedCandidate>;

/// A carrier quote as received from a candidate source or request body.
///
/// Every metric is optional here so that an incomplete record can be
/// reported instead of silently defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCandidate {
    pub id: Option<String>,
    pub name: Option<String>,
    pub cost: Option<f64>,
    #[serde(alias = "time")]
    pub delivery_time: Option<f64>,
    /// Fraction in [0, 1] or percentage in [2, 100].
    pub reliability: Option<f64>,
    #[serde(alias = "tracking")]
    pub has_tracking: Option<bool>,
}

impl RawCandidate {
    /// Creates a fully populated raw candidate.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: f64,
        delivery_time: f64,
        reliability: f64,
        has_tracking: bool,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            cost: Some(cost),
            delivery_time: Some(delivery_time),
            reliability: Some(reliability),
            has_tracking: Some(has_tracking),
        }
    }

    /// Reads one record of a JSON batch.
    ///
    /// A record with a wrongly typed field is rejected as
    /// `MalformedCandidate`, named by its `id` when that is a string and by
    /// its position otherwise.
    pub fn from_json(value: serde_json::Value, index: usize) -> CandidateEntry {
        let id = value
            .get("id")
            .and_then(|id| id.as_str())
            .filter(|id| !id.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{index}"));

        serde_json::from_value(value).map_err(|err| RejectedCandidate {
            id: id.clone(),
            error: RankingError::MalformedCandidate {
                id,
                reason: err.to_string(),
            },
        })
    }

    /// Id to report for this record, even when the id itself is missing.
    pub fn display_id(&self, index: usize) -> String {
        match self.id.as_deref() {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => format!("#{index}"),
        }
    }
}

/// A validated carrier quote. Never mutated after ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    /// Currency units, non-negative.
    pub cost: f64,
    /// Days, non-negative.
    pub delivery_time: f64,
    /// Fraction scale. May still lie outside [0, 1] until normalization clamps it.
    pub reliability: f64,
    pub has_tracking: bool,
}

impl Candidate {
    /// Validates a raw record.
    ///
    /// `index` is the record's position in its batch and is only used to name
    /// records that lack an id.
    ///
    /// # Errors
    /// - Missing or non-finite metric: `IncompleteCandidate`
    /// - Negative cost or delivery time: `InvalidMetric`
    pub fn from_raw(raw: RawCandidate, index: usize) -> Result<Self, RankingError> {
        let report_id = raw.display_id(index);

        let id = raw
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| RankingError::incomplete(&report_id, "id"))?;
        let name = raw
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| RankingError::incomplete(&report_id, "name"))?;

        let cost = required_metric(raw.cost, &id, "cost")?;
        let delivery_time = required_metric(raw.delivery_time, &id, "deliveryTime")?;
        let reliability = required_metric(raw.reliability, &id, "reliability")?;
        let has_tracking = raw
            .has_tracking
            .ok_or_else(|| RankingError::incomplete(&id, "hasTracking"))?;

        if cost < 0.0 {
            return Err(RankingError::invalid_metric(&id, "cost", cost));
        }
        if delivery_time < 0.0 {
            return Err(RankingError::invalid_metric(&id, "deliveryTime", delivery_time));
        }

        let reliability = reliability_as_fraction(&id, reliability);

        Ok(Self {
            id,
            name,
            cost,
            delivery_time,
            reliability,
            has_tracking,
        })
    }
}

fn required_metric(value: Option<f64>, id: &str, field: &'static str) -> Result<f64, RankingError> {
    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| RankingError::incomplete(id, field))
}

fn reliability_as_fraction(id: &str, value: f64) -> f64 {
    if value >= RELIABILITY_PERCENT_THRESHOLD {
        debug!(candidate_id = id, value, "Reading reliability as a percentage");
        value / 100.0
    } else {
        value
    }
}
