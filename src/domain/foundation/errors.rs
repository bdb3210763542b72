//! Error types for the domain layer.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    OutOfRange,
    InvalidFormat,

    // Ranking errors
    UnknownUrgencyTier,
    IncompleteCandidate,
    InvalidMetric,
    MalformedCandidate,
    DuplicateCandidate,
    InvalidPairwiseMatrix,

    // Infrastructure errors
    CandidateSourceUnavailable,
    InternalError,
}

impl ErrorCode {
    /// Returns the wire representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::UnknownUrgencyTier => "UNKNOWN_URGENCY_TIER",
            ErrorCode::IncompleteCandidate => "INCOMPLETE_CANDIDATE",
            ErrorCode::InvalidMetric => "INVALID_METRIC",
            ErrorCode::MalformedCandidate => "MALFORMED_CANDIDATE",
            ErrorCode::DuplicateCandidate => "DUPLICATE_CANDIDATE",
            ErrorCode::InvalidPairwiseMatrix => "INVALID_PAIRWISE_MATRIX",
            ErrorCode::CandidateSourceUnavailable => "CANDIDATE_SOURCE_UNAVAILABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&ValidationError> for ErrorCode {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { .. } => ErrorCode::ValidationFailed,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_serializes_as_wire_string() {
        let json = serde_json::to_value(ErrorCode::CandidateSourceUnavailable).unwrap();
        assert_eq!(json, ErrorCode::CandidateSourceUnavailable.as_str());
    }

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("name");
        assert_eq!(format!("{}", err), "Field 'name' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("analysis_depth", 1, 5, 7);
        assert_eq!(
            format!("{}", err),
            "Field 'analysis_depth' must be between 1 and 5, got 7"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("matrix", "expected 4 rows");
        assert_eq!(
            format!("{}", err),
            "Field 'matrix' has invalid format: expected 4 rows"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::UnknownUrgencyTier), "UNKNOWN_URGENCY_TIER");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }

    #[test]
    fn validation_error_maps_to_code() {
        let err = ValidationError::out_of_range("analysis_depth", 1, 5, 0);
        assert_eq!(ErrorCode::from(&err), ErrorCode::OutOfRange);
    }
}
