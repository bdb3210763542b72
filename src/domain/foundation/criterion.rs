//! Criterion - The four axes a carrier quote is compared on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether lower or higher raw values are preferable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    MinimizeBetter,
    MaximizeBetter,
}

/// One axis of comparison between carrier quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Cost,
    Time,
    Reliability,
    Tracking,
}

impl Criterion {
    /// All criteria in canonical order (cost, time, reliability, tracking).
    pub const ALL: [Criterion; 4] = [
        Criterion::Cost,
        Criterion::Time,
        Criterion::Reliability,
        Criterion::Tracking,
    ];

    /// Position of this criterion in canonical order.
    pub fn index(&self) -> usize {
        match self {
            Criterion::Cost => 0,
            Criterion::Time => 1,
            Criterion::Reliability => 2,
            Criterion::Tracking => 3,
        }
    }

    /// Fixed optimization direction.
    pub fn direction(&self) -> Direction {
        match self {
            Criterion::Cost | Criterion::Time => Direction::MinimizeBetter,
            Criterion::Reliability | Criterion::Tracking => Direction::MaximizeBetter,
        }
    }

    /// Returns the lowercase name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Cost => "cost",
            Criterion::Time => "time",
            Criterion::Reliability => "reliability",
            Criterion::Tracking => "tracking",
        }
    }

    /// Returns the display label for this criterion.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Cost => "Cost",
            Criterion::Time => "Time",
            Criterion::Reliability => "Reliability",
            Criterion::Tracking => "Tracking",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
