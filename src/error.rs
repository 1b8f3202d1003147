// ⚠️ Sort Errors
// The only failure the sorter knows about is a missing input sequence

use thiserror::Error;

/// Errors returned by the checked sort entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Caller passed no sequence where one was required
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SortError {
    /// Build the error for an absent input sequence
    pub fn missing_input(name: &str) -> Self {
        SortError::InvalidArgument(format!("{} must not be absent", name))
    }
}
