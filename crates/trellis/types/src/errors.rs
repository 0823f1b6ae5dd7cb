//! Error types for configuration parsing and validation

use crate::ExperimentKey;

/// Errors that can occur while building a configuration snapshot
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse datafile: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate experiment key in datafile: {0}")]
    DuplicateExperiment(ExperimentKey),

    #[error("Experiment key must not be empty")]
    EmptyExperimentKey,
}

/// Result alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
