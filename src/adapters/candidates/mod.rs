//! Candidate source adapters.

mod fallback_source;
mod json_file_source;
mod static_source;

pub use fallback_source::FallbackCandidateSource;
pub use json_file_source::JsonFileCandidateSource;
pub use static_source::StaticCandidateSource;
