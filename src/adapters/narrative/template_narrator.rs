//! Markdown commentary built from fixed templates.

use crate::domain::foundation::Criterion;
use crate::domain::ranking::{RankedResult, RankingOutcome};
use crate::ports::NarrativeGenerator;

const STRONG_FACTOR: f64 = 0.7;
const WEAK_FACTOR: f64 = 0.3;

/// Deterministic narrator; the same outcome always yields the same text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl TemplateNarrator {
    pub fn new() -> Self {
        Self
    }

    /// One to five stars, proportional to score.
    fn stars(score: f64) -> String {
        let count = (score * 5.0).round().clamp(1.0, 5.0) as usize;
        "★".repeat(count)
    }

    fn strengths(result: &RankedResult) -> Vec<&'static str> {
        let n = &result.normalized;
        let mut strengths = Vec::new();
        if n.cost_factor < WEAK_FACTOR {
            strengths.push("competitive pricing");
        }
        if n.time_factor < WEAK_FACTOR {
            strengths.push("fast delivery");
        }
        if n.reliability_factor > STRONG_FACTOR {
            strengths.push("excellent reliability");
        }
        if n.candidate.has_tracking {
            strengths.push("shipment tracking");
        }
        strengths
    }

    fn weaknesses(result: &RankedResult) -> Vec<&'static str> {
        let n = &result.normalized;
        let mut weaknesses = Vec::new();
        if n.cost_factor > STRONG_FACTOR {
            weaknesses.push("higher cost");
        }
        if n.time_factor > STRONG_FACTOR {
            weaknesses.push("longer delivery time");
        }
        if n.reliability_factor < WEAK_FACTOR {
            weaknesses.push("lower reliability");
        }
        if !n.candidate.has_tracking {
            weaknesses.push("no tracking");
        }
        weaknesses
    }

    /// Criteria on which `leader` earns a larger direction-corrected factor.
    fn advantages(leader: &RankedResult, other: &RankedResult) -> Vec<&'static str> {
        Criterion::ALL
            .into_iter()
            .filter(|&c| {
                leader.normalized.effective_factor(c) > other.normalized.effective_factor(c)
            })
            .map(|c| c.label())
            .collect()
    }
}

impl NarrativeGenerator for TemplateNarrator {
    fn narrate(&self, outcome: &RankingOutcome) -> String {
        let mut text = String::from("## Carrier Recommendation\n\n");

        let Some(winner) = outcome.winner() else {
            text.push_str("No carriers were available to rank.\n");
            if !outcome.rejected.is_empty() {
                text.push_str(&format!(
                    "\n{} submitted carrier(s) were excluded for incomplete or invalid data.\n",
                    outcome.rejected.len()
                ));
            }
            return text;
        };

        text.push_str(&format!(
            "Based on {} ranked carrier(s), **{}** is the recommended choice with a score of **{:.3}**.\n\n",
            outcome.results.len(),
            winner.name(),
            winner.score
        ));

        text.push_str("### Ranking Summary\n\n");
        for result in &outcome.results {
            text.push_str(&format!(
                "{}. **{}** ({}) - Score: {:.3}\n",
                result.rank,
                result.name(),
                Self::stars(result.score),
                result.score
            ));
        }

        let candidate = &winner.normalized.candidate;
        text.push_str(&format!("\n### Why {} Ranks First\n\n", winner.name()));
        text.push_str(&format!(
            "{} quotes **${:.0}** with **{:.0} days** delivery and **{:.0}%** reliability.\n",
            winner.name(),
            candidate.cost,
            candidate.delivery_time,
            winner.normalized.reliability_factor * 100.0
        ));

        let strengths = Self::strengths(winner);
        if !strengths.is_empty() {
            text.push_str(&format!("\n**Key strengths**: {}.\n", strengths.join(", ")));
        }
        let weaknesses = Self::weaknesses(winner);
        if !weaknesses.is_empty() {
            text.push_str(&format!(
                "\n**Areas for consideration**: {}.\n",
                weaknesses.join(", ")
            ));
        }

        if let Some(contributions) = &winner.criterion_contributions {
            let dominant = contributions.dominant();
            text.push_str(&format!(
                "\n{} drives {:.0}% of this score.\n",
                dominant.label(),
                contributions.get(dominant) * 100.0
            ));
        }

        if let Some(runner_up) = outcome.results.get(1) {
            text.push_str(&format!(
                "\n### Comparison with {} (Rank 2)\n\n",
                runner_up.name()
            ));
            let margin = winner.score - runner_up.score;
            let advantages = Self::advantages(winner, runner_up);
            if advantages.is_empty() {
                text.push_str(&format!("{} leads by {:.3} points.\n", winner.name(), margin));
            } else {
                text.push_str(&format!(
                    "{} leads by {:.3} points, ahead on {}.\n",
                    winner.name(),
                    margin,
                    advantages.join(", ").to_lowercase()
                ));
            }
        }

        if !outcome.rejected.is_empty() {
            text.push_str(&format!(
                "\n_{} submitted carrier(s) were excluded for incomplete or invalid data._\n",
                outcome.rejected.len()
            ));
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AnalysisDepth;
    use crate::domain::ranking::{RankingEngine, RawCandidate, STANDARD_WEIGHTS};

    fn outcome(candidates: Vec<RawCandidate>) -> RankingOutcome {
        RankingEngine::default().rank_with_weights(STANDARD_WEIGHTS, candidates, AnalysisDepth::MAX)
    }

    fn reference() -> Vec<RawCandidate> {
        vec![
            RawCandidate::new("f1", "AfricaLogistics", 1200.0, 14.0, 0.85, true),
            RawCandidate::new("f2", "GlobalFreight", 950.0, 18.0, 0.78, false),
            RawCandidate::new("f3", "ExpressShip", 1450.0, 10.0, 0.92, true),
        ]
    }

    #[test]
    fn names_winner_with_three_decimal_score() {
        let text = TemplateNarrator::new().narrate(&outcome(reference()));
        assert!(text.contains(
            "**AfricaLogistics** is the recommended choice with a score of **0.710**"
        ));
        assert!(text.contains("### Comparison with ExpressShip (Rank 2)"));
    }

    #[test]
    fn lists_every_ranked_carrier_in_order() {
        let text = TemplateNarrator::new().narrate(&outcome(reference()));
        let first = text.find("1. **AfricaLogistics**").unwrap();
        let second = text.find("2. **ExpressShip**").unwrap();
        let third = text.find("3. **GlobalFreight**").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn reports_strengths_of_winner() {
        let text = TemplateNarrator::new().narrate(&outcome(reference()));
        assert!(text.contains("excellent reliability"));
        assert!(text.contains("shipment tracking"));
    }

    #[test]
    fn empty_outcome_says_so() {
        let text = TemplateNarrator::new().narrate(&outcome(Vec::new()));
        assert!(text.contains("No carriers were available to rank."));
    }

    #[test]
    fn mentions_rejected_count() {
        let mut candidates = reference();
        candidates.push(RawCandidate {
            id: Some("bad".to_string()),
            ..RawCandidate::default()
        });
        let text = TemplateNarrator::new().narrate(&outcome(candidates));
        assert!(text.contains("1 submitted carrier(s) were excluded"));
    }

    #[test]
    fn narration_is_deterministic() {
        let outcome = outcome(reference());
        let narrator = TemplateNarrator::new();
        assert_eq!(narrator.narrate(&outcome), narrator.narrate(&outcome));
    }

    #[test]
    fn stars_are_bounded() {
        assert_eq!(TemplateNarrator::stars(0.0), "★");
        assert_eq!(TemplateNarrator::stars(0.71), "★★★★");
        assert_eq!(TemplateNarrator::stars(1.4), "★★★★★");
    }
}
