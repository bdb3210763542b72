//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (criteria, urgency tiers, errors)
//! - `ranking` - Pure multi-criteria ranking and sensitivity engine

pub mod foundation;
pub mod ranking;
