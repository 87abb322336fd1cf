//! Domain error types.

use thiserror::Error;

/// Message returned whenever a bucket identifier fails validation.
pub const INVALID_BUCKET_ID_MESSAGE: &str =
    "Invalid bucket ID. Allowed characters are a-z, A-Z, 0-9, '-', '_', and '.'";

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The caller-supplied bucket identifier contains disallowed characters
    /// or is empty. Carries the rejected value.
    #[error("{}", INVALID_BUCKET_ID_MESSAGE)]
    InvalidBucketId(String),

    /// The create payload is missing fields or carries invalid values.
    #[error("{0}")]
    MalformedRequest(String),

    /// The requested bucket contents or event do not exist.
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// The backing store is unreachable or rejected the operation.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// What a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotFound {
    /// The bucket holds no events.
    #[error("No events found in this bucket")]
    EmptyBucket,

    /// No event with the given id exists in the given bucket.
    #[error("Event not found")]
    Event,
}
