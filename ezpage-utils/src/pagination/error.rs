//! Errors raised by the page controller.

use thiserror::Error;

/// Local, synchronous failures of the pagination state machine.
///
/// Neither variant is retryable. The host layer decides whether to log,
/// ignore, or acknowledge the interaction without a visible change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The controller was constructed from unusable input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Navigation was attempted out of bounds or after the session expired.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl PaginationError {
    pub(crate) fn empty_items() -> Self {
        Self::InvalidArgument("pagination requires at least one item".to_owned())
    }

    pub(crate) fn expired() -> Self {
        Self::InvalidState("pagination session has expired".to_owned())
    }
}
