use crate::domain::ranking::RankingOutcome;

/// Port turning a ranking outcome into human-readable commentary.
///
/// Implementations only read the outcome; they never re-derive scores.
pub trait NarrativeGenerator: Send + Sync {
    /// Returns markdown text describing the outcome.
    fn narrate(&self, outcome: &RankingOutcome) -> String;
}
