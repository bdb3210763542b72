//! Weight Resolver - Fixed per-urgency priority profiles.

use serde::{Deserialize, Serialize};

use super::RankingError;
use crate::domain::foundation::{Criterion, UrgencyTier};

/// Relative importance of each criterion.
///
/// The fixed tier vectors sum to 1.0. Vectors produced by [`WeightVector::scaled`]
/// deliberately do not, so consumers must not assume a unit sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub cost: f64,
    pub time: f64,
    pub reliability: f64,
    pub tracking: f64,
}

/// Standard shipping: cost dominates.
pub const STANDARD_WEIGHTS: WeightVector = WeightVector {
    cost: 0.4,
    time: 0.3,
    reliability: 0.2,
    tracking: 0.1,
};

/// Express shipping: time dominates.
pub const EXPRESS_WEIGHTS: WeightVector = WeightVector {
    cost: 0.2,
    time: 0.5,
    reliability: 0.2,
    tracking: 0.1,
};

/// Rush shipping: time dominates heavily.
pub const RUSH_WEIGHTS: WeightVector = WeightVector {
    cost: 0.1,
    time: 0.6,
    reliability: 0.2,
    tracking: 0.1,
};

impl WeightVector {
    /// Builds a vector from weights in canonical criterion order.
    pub fn from_array(weights: [f64; 4]) -> Self {
        Self {
            cost: weights[0],
            time: weights[1],
            reliability: weights[2],
            tracking: weights[3],
        }
    }

    /// Returns the weights in canonical criterion order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.cost, self.time, self.reliability, self.tracking]
    }

    /// Returns the weight for one criterion.
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Cost => self.cost,
            Criterion::Time => self.time,
            Criterion::Reliability => self.reliability,
            Criterion::Tracking => self.tracking,
        }
    }

    pub fn sum(&self) -> f64 {
        self.cost + self.time + self.reliability + self.tracking
    }

    /// Returns a copy with one weight multiplied by `factor`.
    ///
    /// The other weights are left untouched and the result is not renormalized.
    pub fn scaled(&self, criterion: Criterion, factor: f64) -> Self {
        let mut weights = self.to_array();
        weights[criterion.index()] *= factor;
        Self::from_array(weights)
    }

    /// Returns a copy rescaled to sum to 1.0. A zero vector is returned as is.
    pub fn renormalized(&self) -> Self {
        let total = self.sum();
        if total <= 0.0 {
            return *self;
        }
        let weights = self.to_array().map(|w| w / total);
        Self::from_array(weights)
    }
}

/// Maps urgency tiers onto their fixed weight vectors.
pub struct WeightResolver;

impl WeightResolver {
    /// Resolves a tier name into its weight vector.
    ///
    /// Unknown names are an error; there is no default tier.
    pub fn resolve(urgency_tier: &str) -> Result<WeightVector, RankingError> {
        let tier: UrgencyTier = urgency_tier.parse()?;
        Ok(Self::for_tier(tier))
    }

    /// Returns the fixed vector for a parsed tier.
    pub fn for_tier(tier: UrgencyTier) -> WeightVector {
        match tier {
            UrgencyTier::Standard => STANDARD_WEIGHTS,
            UrgencyTier::Express => EXPRESS_WEIGHTS,
            UrgencyTier::Rush => RUSH_WEIGHTS,
        }
    }
}
