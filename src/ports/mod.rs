//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the ranking domain and its collaborators. Adapters implement these ports.
//!
//! - `CandidateSource` - Supplies raw carrier quotes for a route
//! - `NarrativeGenerator` - Renders a ranking outcome as commentary

mod candidate_source;
mod narrative_generator;

pub use candidate_source::{CandidateSource, CandidateSourceError, ShipmentRoute};
pub use narrative_generator::NarrativeGenerator;
