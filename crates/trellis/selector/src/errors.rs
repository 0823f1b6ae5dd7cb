//! Error types for the selector workflow

use trellis_overrides::OverrideError;

/// Errors that can occur when committing a selection
#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    #[error("No selection to commit")]
    NothingSelected,

    #[error(transparent)]
    Override(#[from] OverrideError),
}

/// Result alias for selector operations
pub type SelectorResult<T> = Result<T, SelectorError>;
