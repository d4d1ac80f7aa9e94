//! Precondition failures raised at API boundaries.

use thiserror::Error;

/// Error returned when a caller passes an argument the operation cannot accept.
///
/// These are raised before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required string was empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),
    /// A range was given with its bounds swapped.
    #[error("min ({min}) must be <= max ({max})")]
    InvertedRange {
        /// Lower bound supplied by the caller.
        min: i64,
        /// Upper bound supplied by the caller.
        max: i64,
    },
    /// Input could not be parsed as a namespaced key.
    #[error("invalid namespaced key: {0}")]
    InvalidKey(String),
}
