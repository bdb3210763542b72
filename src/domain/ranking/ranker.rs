//! Ranker - Orders scored candidates best-first.

use serde::{Deserialize, Serialize};

use super::NormalizedCandidate;

/// A normalized candidate paired with its composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub normalized: NormalizedCandidate,
    pub score: f64,
}

/// A scored candidate with its position in the ranking (1 = best).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub normalized: NormalizedCandidate,
    pub score: f64,
    pub rank: usize,
    /// Position in the scored input, before sorting.
    pub input_index: usize,
}

/// Ranking functions.
pub struct Ranker;

impl Ranker {
    /// Sorts by descending score and assigns ranks `1..=N`.
    ///
    /// The sort is stable: candidates with equal scores keep their input order.
    pub fn rank(scored: Vec<ScoredCandidate>) -> Vec<RankedCandidate> {
        let mut indexed: Vec<(usize, ScoredCandidate)> = scored.into_iter().enumerate().collect();
        indexed.sort_by(|(_, a), (_, b)| b.score.total_cmp(&a.score));

        indexed
            .into_iter()
            .enumerate()
            .map(|(position, (input_index, s))| RankedCandidate {
                normalized: s.normalized,
                score: s.score,
                rank: position + 1,
                input_index,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::{Normalizer, RawCandidate};

    fn scored(id: &str, score: f64) -> ScoredCandidate {
        let normalized = Normalizer::default()
            .normalize(vec![RawCandidate::new(id, id, 1000.0, 10.0, 0.9, true)])
            .candidates
            .remove(0);
        ScoredCandidate { normalized, score }
    }

    fn ids(ranked: &[RankedCandidate]) -> Vec<&str> {
        ranked
            .iter()
            .map(|r| r.normalized.candidate.id.as_str())
            .collect()
    }

    #[test]
    fn rank_empty_returns_empty() {
        assert!(Ranker::rank(Vec::new()).is_empty());
    }

    #[test]
    fn rank_orders_by_descending_score() {
        let ranked = Ranker::rank(vec![scored("a", 0.2), scored("b", 0.9), scored("c", 0.5)]);
        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
        assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(ranked.iter().map(|r| r.input_index).collect::<Vec<_>>(), vec![1, 2, 0]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = Ranker::rank(vec![
            scored("first", 0.5),
            scored("top", 0.8),
            scored("second", 0.5),
            scored("third", 0.5),
        ]);
        assert_eq!(ids(&ranked), vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn ties_are_stable_across_repeated_runs() {
        let input = vec![scored("x", 0.4), scored("y", 0.4), scored("z", 0.4)];
        let first = Ranker::rank(input.clone());
        for _ in 0..20 {
            assert_eq!(Ranker::rank(input.clone()), first);
        }
        assert_eq!(ids(&first), vec!["x", "y", "z"]);
    }
}
