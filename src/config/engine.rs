//! Ranking engine calibration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ranking::{NormalizationParams, RankingEngine, ScoringMethod, SensitivityMode};

/// Normalization constants and sensitivity behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Cost at or below which the cost factor is 0
    #[serde(default = "default_cost_floor")]
    pub cost_floor: f64,

    /// Cost span mapped onto [0, 1] above the floor
    #[serde(default = "default_cost_range")]
    pub cost_range: f64,

    /// Delivery time, in days, at or above which the time factor is 1
    #[serde(default = "default_time_ceiling")]
    pub time_ceiling: f64,

    /// `probe` or `renormalized`
    #[serde(default)]
    pub sensitivity_mode: SensitivityMode,

    /// `weighted_sum` or `topsis`
    #[serde(default)]
    pub scoring_method: ScoringMethod,
}

impl EngineConfig {
    /// Normalization parameters, validated
    pub fn params(&self) -> Result<NormalizationParams, ValidationError> {
        Ok(NormalizationParams::try_new(
            self.cost_floor,
            self.cost_range,
            self.time_ceiling,
        )?)
    }

    /// Build the configured engine
    pub fn build_engine(&self) -> Result<RankingEngine, ValidationError> {
        Ok(RankingEngine::new(self.params()?, self.sensitivity_mode)
            .with_scoring_method(self.scoring_method))
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.params().map(|_| ())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cost_floor: default_cost_floor(),
            cost_range: default_cost_range(),
            time_ceiling: default_time_ceiling(),
            sensitivity_mode: SensitivityMode::default(),
            scoring_method: ScoringMethod::default(),
        }
    }
}

fn default_cost_floor() -> f64 {
    NormalizationParams::DEFAULT_COST_FLOOR
}

fn default_cost_range() -> f64 {
    NormalizationParams::DEFAULT_COST_RANGE
}

fn default_time_ceiling() -> f64 {
    NormalizationParams::DEFAULT_TIME_CEILING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.cost_floor, 900.0);
        assert_eq!(config.cost_range, 1000.0);
        assert_eq!(config.time_ceiling, 30.0);
        assert_eq!(config.sensitivity_mode, SensitivityMode::Probe);
        assert_eq!(config.scoring_method, ScoringMethod::WeightedSum);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_build_engine_carries_calibration() {
        let config = EngineConfig {
            time_ceiling: 20.0,
            sensitivity_mode: SensitivityMode::Renormalized,
            ..Default::default()
        };
        let engine = config.build_engine().unwrap();
        assert_eq!(engine.params().time_ceiling, 20.0);
        assert_eq!(engine.sensitivity_mode(), SensitivityMode::Renormalized);
        assert_eq!(engine.scoring_method(), ScoringMethod::WeightedSum);
    }

    #[test]
    fn test_build_engine_carries_scoring_method() {
        let config = EngineConfig {
            scoring_method: ScoringMethod::Topsis,
            ..Default::default()
        };
        assert_eq!(config.build_engine().unwrap().scoring_method(), ScoringMethod::Topsis);
    }

    #[test]
    fn test_zero_cost_range_is_invalid() {
        let config = EngineConfig {
            cost_range: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCalibration(_))
        ));
    }

    #[test]
    fn test_negative_time_ceiling_is_invalid() {
        let config = EngineConfig {
            time_ceiling: -5.0,
            ..Default::default()
        };
        assert!(config.build_engine().is_err());
    }
}
