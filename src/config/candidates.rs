//! Candidate source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where carrier quotes come from when a request does not supply them
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatesConfig {
    /// JSON forwarder file; when unset only the built-in dataset is served
    pub data_path: Option<PathBuf>,

    /// Serve the built-in dataset when the file yields nothing
    #[serde(default = "default_fallback")]
    pub fallback: bool,
}

impl CandidatesConfig {
    /// Validate candidate source configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.data_path {
            Some(path) if path.as_os_str().is_empty() => Err(ValidationError::EmptyDataPath),
            _ => Ok(()),
        }
    }
}

impl Default for CandidatesConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            fallback: default_fallback(),
        }
    }
}

fn default_fallback() -> bool {
    true
}
