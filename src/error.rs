//! Errors raised by the tracker domain model.

use thiserror::Error;

/// Errors raised by activity lookup, entity validation and indexed access.
///
/// The domain model never logs or retries; every error goes straight back
/// to the caller and leaves the entity it was raised on unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// No activity matches the given name
    #[error("Invalid activity type: {name}. Choose from {choices}.")]
    InvalidActivityType { name: String, choices: String },

    /// A field failed validation; the message is shown verbatim
    #[error("{0}")]
    InvalidArgument(String),

    /// Positional access outside `[0, len)`
    #[error("Invalid {collection} index: {index} ({len} available).")]
    IndexOutOfRange {
        collection: &'static str,
        index: i64,
        len: usize,
    },

    /// A user with this id is already registered
    #[error("User ID already exists. Try a different one.")]
    DuplicateUserId(String),
}

impl TrackerError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        TrackerError::InvalidArgument(message.into())
    }
}

/// Result alias for domain operations.
pub type TrackerResult<T> = Result<T, TrackerError>;
