//! Bucket identifiers.
//!
//! A bucket is a caller-defined namespace grouping events. Its identifier is
//! restricted to ASCII letters, digits, `_`, `-` and `.`, and must not be
//! empty. The check runs before any storage access.

use std::fmt;

use crate::error::DomainError;

/// A validated bucket identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketId(String);

impl BucketId {
    /// Validates `raw` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBucketId` if `raw` is empty or contains a
    /// character outside `[a-zA-Z0-9_.-]`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if is_valid(raw) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(DomainError::InvalidBucketId(raw.to_owned()))
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
}
