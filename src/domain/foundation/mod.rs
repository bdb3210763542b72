//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of carrier ranking.

mod analysis_depth;
mod criterion;
mod errors;
mod urgency;

pub use analysis_depth::AnalysisDepth;
pub use criterion::{Criterion, Direction};
pub use errors::{ErrorCode, ValidationError};
pub use urgency::{UnknownTier, UrgencyTier};
