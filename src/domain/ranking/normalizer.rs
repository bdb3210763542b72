//! Normalizer - Maps raw carrier metrics onto the [0, 1] scale.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use super::{Candidate, CandidateEntry, RankingError, RawCandidate};
use crate::domain::foundation::{Criterion, Direction, ValidationError};

/// Calibration constants for cost and time normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationParams {
    /// Cost at or below which `cost_factor` is 0.
    pub cost_floor: f64,
    /// Cost span mapped onto [0, 1] above the floor.
    pub cost_range: f64,
    /// Delivery time (days) at or above which `time_factor` is 1.
    pub time_ceiling: f64,
}

impl NormalizationParams {
    pub const DEFAULT_COST_FLOOR: f64 = 900.0;
    pub const DEFAULT_COST_RANGE: f64 = 1000.0;
    pub const DEFAULT_TIME_CEILING: f64 = 30.0;

    /// Creates validated parameters.
    ///
    /// # Errors
    /// Any non-finite value, a negative floor, or a non-positive range or ceiling.
    pub fn try_new(
        cost_floor: f64,
        cost_range: f64,
        time_ceiling: f64,
    ) -> Result<Self, ValidationError> {
        if !cost_floor.is_finite() || cost_floor < 0.0 {
            return Err(ValidationError::invalid_format(
                "cost_floor",
                "must be a finite, non-negative number",
            ));
        }
        if !cost_range.is_finite() || cost_range <= 0.0 {
            return Err(ValidationError::invalid_format(
                "cost_range",
                "must be a finite, positive number",
            ));
        }
        if !time_ceiling.is_finite() || time_ceiling <= 0.0 {
            return Err(ValidationError::invalid_format(
                "time_ceiling",
                "must be a finite, positive number",
            ));
        }
        Ok(Self {
            cost_floor,
            cost_range,
            time_ceiling,
        })
    }
}

impl Default for NormalizationParams {
    fn default() -> Self {
        Self {
            cost_floor: Self::DEFAULT_COST_FLOOR,
            cost_range: Self::DEFAULT_COST_RANGE,
            time_ceiling: Self::DEFAULT_TIME_CEILING,
        }
    }
}

/// Read-only view of a candidate with its normalized factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCandidate {
    pub candidate: Candidate,
    pub cost_factor: f64,
    pub time_factor: f64,
    pub reliability_factor: f64,
    pub tracking_factor: f64,
}

impl NormalizedCandidate {
    /// Raw normalized factor: higher means more cost, more time, more reliability.
    pub fn factor(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Cost => self.cost_factor,
            Criterion::Time => self.time_factor,
            Criterion::Reliability => self.reliability_factor,
            Criterion::Tracking => self.tracking_factor,
        }
    }

    /// Direction-corrected factor: higher is always better.
    ///
    /// Minimize-better criteria are inverted as `1 - factor`.
    pub fn effective_factor(&self, criterion: Criterion) -> f64 {
        let factor = self.factor(criterion);
        match criterion.direction() {
            Direction::MinimizeBetter => 1.0 - factor,
            Direction::MaximizeBetter => factor,
        }
    }
}

/// A metric that fell outside [0, 1] and was clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClampEvent {
    pub candidate_id: String,
    pub criterion: Criterion,
    /// Factor before clamping.
    pub raw: f64,
    pub clamped: f64,
}

/// A record excluded from ranking, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedCandidate {
    pub id: String,
    pub error: RankingError,
}

/// Result of normalizing one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalization {
    /// Valid candidates, in input order.
    pub candidates: Vec<NormalizedCandidate>,
    pub rejected: Vec<RejectedCandidate>,
    pub clamp_events: Vec<ClampEvent>,
}

/// Normalizes candidate batches under fixed calibration parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    params: NormalizationParams,
}

impl Normalizer {
    pub fn new(params: NormalizationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &NormalizationParams {
        &self.params
    }

    /// Validates and normalizes a batch.
    ///
    /// Invalid records are moved to `rejected` and never abort the batch.
    /// When an id repeats, the first occurrence wins.
    pub fn normalize(&self, raw: Vec<RawCandidate>) -> Normalization {
        self.normalize_entries(raw.into_iter().map(Ok).collect())
    }

    /// Same as [`normalize`](Self::normalize), for batches where some
    /// records were already rejected while being read. Those keep their
    /// position so that records without an id are still named correctly.
    pub fn normalize_entries(&self, entries: Vec<CandidateEntry>) -> Normalization {
        let mut result = Normalization::default();
        let mut seen_ids = HashSet::new();

        for (index, entry) in entries.into_iter().enumerate() {
            let record = match entry {
                Ok(record) => record,
                Err(rejected) => {
                    warn!(
                        candidate_id = %rejected.id,
                        error = %rejected.error,
                        "Rejecting candidate"
                    );
                    result.rejected.push(rejected);
                    continue;
                }
            };
            let report_id = record.display_id(index);

            let candidate = match Candidate::from_raw(record, index) {
                Ok(candidate) => candidate,
                Err(error) => {
                    warn!(candidate_id = %report_id, %error, "Rejecting candidate");
                    result.rejected.push(RejectedCandidate { id: report_id, error });
                    continue;
                }
            };

            if !seen_ids.insert(candidate.id.clone()) {
                let error = RankingError::DuplicateCandidate {
                    id: candidate.id.clone(),
                };
                warn!(candidate_id = %candidate.id, %error, "Rejecting candidate");
                result.rejected.push(RejectedCandidate {
                    id: candidate.id,
                    error,
                });
                continue;
            }

            result
                .candidates
                .push(self.normalize_one(candidate, &mut result.clamp_events));
        }

        result
    }

    fn normalize_one(
        &self,
        candidate: Candidate,
        events: &mut Vec<ClampEvent>,
    ) -> NormalizedCandidate {
        let p = &self.params;
        let raw_cost = (candidate.cost - p.cost_floor) / p.cost_range;
        let raw_time = candidate.delivery_time / p.time_ceiling;

        let cost_factor = clamp01(&candidate.id, Criterion::Cost, raw_cost, events);
        let time_factor = clamp01(&candidate.id, Criterion::Time, raw_time, events);
        let reliability_factor = clamp01(
            &candidate.id,
            Criterion::Reliability,
            candidate.reliability,
            events,
        );
        let tracking_factor = if candidate.has_tracking { 1.0 } else { 0.0 };

        NormalizedCandidate {
            candidate,
            cost_factor,
            time_factor,
            reliability_factor,
            tracking_factor,
        }
    }
}

fn clamp01(
    candidate_id: &str,
    criterion: Criterion,
    raw: f64,
    events: &mut Vec<ClampEvent>,
) -> f64 {
    let clamped = raw.clamp(0.0, 1.0);
    if clamped != raw {
        // Cost and time run past the calibration window routinely; reliability
        // out of range means bad data.
        if criterion == Criterion::Reliability {
            warn!(candidate_id, raw, clamped, "Clamped reliability into [0, 1]");
        } else {
            debug!(candidate_id, %criterion, raw, clamped, "Clamped factor into [0, 1]");
        }
        events.push(ClampEvent {
            candidate_id: candidate_id.to_string(),
            criterion,
            raw,
            clamped,
        });
    }
    clamped
}
