//! Ranking Engine - Resolve, normalize, score, rank, analyze.
//!
//! The single entry point every caller goes through. Each call is pure and
//! independent: one weight vector, one candidate snapshot, one outcome.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    CandidateEntry, ClampEvent, ContributionAnalyzer, CriterionContributions, NormalizationParams,
    NormalizedCandidate, Normalizer, Ranker, RankingError, RawCandidate, RejectedCandidate,
    ScoredCandidate, Scorer, ScoringMethod, SensitivityAnalysis, SensitivityAnalyzer,
    SensitivityMode, Separation, TopsisScorer, WeightResolver, WeightVector,
};
use crate::domain::foundation::AnalysisDepth;

/// Input to one ranking call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRequest {
    pub urgency_tier: String,
    pub candidates: Vec<RawCandidate>,
    #[serde(default)]
    pub analysis_depth: AnalysisDepth,
}

/// One ranked candidate with the analysis its depth calls for.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub normalized: NormalizedCandidate,
    /// Not bounded a priori; see [`Scorer::score`].
    pub score: f64,
    pub rank: usize,
    /// Present from depth 4.
    pub criterion_contributions: Option<CriterionContributions>,
    /// Present from depth 5.
    pub sensitivity_analysis: Option<SensitivityAnalysis>,
    /// TOPSIS only, present from depth 4.
    pub separation: Option<Separation>,
}

impl RankedResult {
    pub fn id(&self) -> &str {
        &self.normalized.candidate.id
    }

    pub fn name(&self) -> &str {
        &self.normalized.candidate.name
    }
}

/// Output of one ranking call. Owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingOutcome {
    pub weights: WeightVector,
    pub scoring_method: ScoringMethod,
    pub analysis_depth: AnalysisDepth,
    /// Best first; ranks are exactly `1..=results.len()`.
    pub results: Vec<RankedResult>,
    pub rejected: Vec<RejectedCandidate>,
    pub clamp_events: Vec<ClampEvent>,
}

impl RankingOutcome {
    /// The recommended candidate, if any candidate survived validation.
    pub fn winner(&self) -> Option<&RankedResult> {
        self.results.first()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Multi-criteria ranking and sensitivity engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine {
    normalizer: Normalizer,
    sensitivity: SensitivityAnalyzer,
    scoring_method: ScoringMethod,
}

impl RankingEngine {
    pub fn new(params: NormalizationParams, mode: SensitivityMode) -> Self {
        Self {
            normalizer: Normalizer::new(params),
            sensitivity: SensitivityAnalyzer::new(mode),
            scoring_method: ScoringMethod::default(),
        }
    }

    /// Returns the engine with a different scoring model.
    pub fn with_scoring_method(mut self, scoring_method: ScoringMethod) -> Self {
        self.scoring_method = scoring_method;
        self
    }

    pub fn scoring_method(&self) -> ScoringMethod {
        self.scoring_method
    }

    pub fn params(&self) -> &NormalizationParams {
        self.normalizer.params()
    }

    pub fn sensitivity_mode(&self) -> SensitivityMode {
        self.sensitivity.mode()
    }

    /// Ranks a request under its urgency tier's fixed weights.
    ///
    /// # Errors
    /// `UnknownUrgencyTier` when the tier is not standard, express or rush.
    /// Invalid candidates never fail the call; they land in `rejected`.
    pub fn rank(&self, request: RankingRequest) -> Result<RankingOutcome, RankingError> {
        let weights = WeightResolver::resolve(&request.urgency_tier)?;
        Ok(self.rank_with_weights(weights, request.candidates, request.analysis_depth))
    }

    /// Ranks candidates under an explicit weight vector.
    ///
    /// # Edge Cases
    /// - No valid candidates: empty `results`, `weights` still populated
    pub fn rank_with_weights(
        &self,
        weights: WeightVector,
        candidates: Vec<RawCandidate>,
        analysis_depth: AnalysisDepth,
    ) -> RankingOutcome {
        self.rank_entries(weights, candidates.into_iter().map(Ok).collect(), analysis_depth)
    }

    /// Ranks a batch in which some records were rejected while being read.
    ///
    /// Rejected entries go straight to `rejected`, in input order with the
    /// records rejected during validation.
    pub fn rank_entries(
        &self,
        weights: WeightVector,
        entries: Vec<CandidateEntry>,
        analysis_depth: AnalysisDepth,
    ) -> RankingOutcome {
        let submitted = entries.len();
        let normalization = self.normalizer.normalize_entries(entries);

        let results = match self.scoring_method {
            ScoringMethod::WeightedSum => {
                self.rank_weighted_sum(normalization.candidates, &weights, analysis_depth)
            }
            ScoringMethod::Topsis => {
                self.rank_topsis(normalization.candidates, &weights, analysis_depth)
            }
        };

        debug!(
            submitted,
            ranked = results.len(),
            rejected = normalization.rejected.len(),
            clamped = normalization.clamp_events.len(),
            depth = analysis_depth.value(),
            method = self.scoring_method.as_str(),
            "Ranked candidates"
        );

        RankingOutcome {
            weights,
            scoring_method: self.scoring_method,
            analysis_depth,
            results,
            rejected: normalization.rejected,
            clamp_events: normalization.clamp_events,
        }
    }

    fn rank_weighted_sum(
        &self,
        candidates: Vec<NormalizedCandidate>,
        weights: &WeightVector,
        analysis_depth: AnalysisDepth,
    ) -> Vec<RankedResult> {
        let scored = candidates
            .into_iter()
            .map(|normalized| {
                let score = Scorer::score(&normalized, weights);
                ScoredCandidate { normalized, score }
            })
            .collect();

        Ranker::rank(scored)
            .into_iter()
            .map(|ranked| {
                let criterion_contributions = analysis_depth.includes_contributions().then(|| {
                    ContributionAnalyzer::contributions(&ranked.normalized, weights, ranked.score)
                });
                let sensitivity_analysis = analysis_depth.includes_sensitivity().then(|| {
                    self.sensitivity
                        .analyze(&ranked.normalized, weights, ranked.score)
                });

                RankedResult {
                    normalized: ranked.normalized,
                    score: ranked.score,
                    rank: ranked.rank,
                    criterion_contributions,
                    sensitivity_analysis,
                    separation: None,
                }
            })
            .collect()
    }

    fn rank_topsis(
        &self,
        candidates: Vec<NormalizedCandidate>,
        weights: &WeightVector,
        analysis_depth: AnalysisDepth,
    ) -> Vec<RankedResult> {
        let evaluations = TopsisScorer::evaluate(&candidates, weights);

        // Perturbed batches are re-evaluated once per perturbation, not per candidate.
        let perturbed_scores: Vec<Vec<f64>> = if analysis_depth.includes_sensitivity() {
            self.sensitivity
                .perturbed_weights(weights)
                .iter()
                .map(|perturbed| TopsisScorer::scores(&candidates, perturbed))
                .collect()
        } else {
            Vec::new()
        };

        let scored = candidates
            .iter()
            .zip(&evaluations)
            .map(|(normalized, evaluation)| ScoredCandidate {
                normalized: normalized.clone(),
                score: evaluation.closeness,
            })
            .collect();

        Ranker::rank(scored)
            .into_iter()
            .map(|ranked| {
                let evaluation = evaluations[ranked.input_index];
                let criterion_contributions = analysis_depth
                    .includes_contributions()
                    .then_some(evaluation.contributions);
                let separation = analysis_depth
                    .includes_contributions()
                    .then_some(evaluation.separation);
                let sensitivity_analysis = analysis_depth.includes_sensitivity().then(|| {
                    self.sensitivity.analyze_with(weights, ranked.score, |perturbation, _| {
                        perturbed_scores[perturbation][ranked.input_index]
                    })
                });

                RankedResult {
                    normalized: ranked.normalized,
                    score: ranked.score,
                    rank: ranked.rank,
                    criterion_contributions,
                    sensitivity_analysis,
                    separation,
                }
            })
            .collect()
    }
}
