//! Analysis depth value object (1-5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// How much analysis detail a ranking response carries.
///
/// A gate, not a precision knob: depth 4 adds criterion contributions,
/// depth 5 adds sensitivity analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnalysisDepth(u8);

impl AnalysisDepth {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    /// Depth from which criterion contributions are included.
    pub const CONTRIBUTIONS: Self = Self(4);

    /// Depth from which sensitivity analysis is included.
    pub const SENSITIVITY: Self = Self(5);

    /// Creates an AnalysisDepth, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "analysis_depth",
                i32::from(Self::MIN.0),
                i32::from(Self::MAX.0),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn includes_contributions(&self) -> bool {
        *self >= Self::CONTRIBUTIONS
    }

    pub fn includes_sensitivity(&self) -> bool {
        *self >= Self::SENSITIVITY
    }
}

impl Default for AnalysisDepth {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for AnalysisDepth {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<i64> for AnalysisDepth {
    type Error = ValidationError;

    /// Accepts any wire integer so that -1 or 300 report the same range
    /// error as 0 or 6.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(depth) => Self::try_new(depth),
            Err(_) => Err(ValidationError::out_of_range(
                "analysis_depth",
                i32::from(Self::MIN.0),
                i32::from(Self::MAX.0),
                value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            )),
        }
    }
}

impl From<AnalysisDepth> for u8 {
    fn from(depth: AnalysisDepth) -> Self {
        depth.0
    }
}

impl fmt::Display for AnalysisDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
