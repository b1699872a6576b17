//! Error types for name building and validation.

use thiserror::Error;

/// The first rule a candidate DNS name violates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DnsNameError {
    /// The name is empty.
    #[error("name cannot be empty")]
    Empty,

    /// The name exceeds the length limit.
    #[error("name is {len} characters long, limit is {max}")]
    TooLong { len: usize, max: usize },

    /// The name does not start with an ASCII letter or digit.
    #[error("name must start with an alphanumeric character, got '{ch}'")]
    InvalidStart { ch: char },

    /// The name does not end with an ASCII letter or digit.
    #[error("name must end with an alphanumeric character, got '{ch}'")]
    InvalidEnd { ch: char },

    /// The name contains a character outside the allowed set.
    #[error("invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },
}

impl DnsNameError {
    /// Returns true if the name was rejected only for its length.
    pub fn is_too_long(&self) -> bool {
        matches!(self, DnsNameError::TooLong { .. })
    }
}

/// Why a friendly name could not be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidReason {
    /// The image tag is empty.
    #[error("image tag cannot be empty")]
    EmptyImageTag,

    /// Sanitizing the image tag left nothing.
    #[error("image tag '{tag}' has no usable characters")]
    EmptySanitizedTag { tag: String },

    /// The hash is empty.
    #[error("hash cannot be empty")]
    EmptyHash,

    /// The hash has fewer characters than the fragments need.
    #[error("hash is {len} characters long, need at least {min}")]
    HashTooShort { len: usize, min: usize },

    /// The hash contains `:` or `/`.
    #[error("hash contains invalid character '{ch}'")]
    InvalidHashCharacter { ch: char },

    /// The assembled `namespace-kind-name` is not a valid DNS subdomain.
    #[error("instance name '{name}' is not a valid DNS subdomain: {source}")]
    InvalidInstanceName {
        name: String,
        #[source]
        source: DnsNameError,
    },
}

/// Returned by the friendly name builders when an input fails a precondition.
///
/// No partial result is ever produced alongside this error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid friendly name: {reason}")]
pub struct InvalidFriendlyNameError {
    reason: InvalidReason,
}

impl InvalidFriendlyNameError {
    pub(crate) fn new(reason: InvalidReason) -> Self {
        Self { reason }
    }

    /// Returns the precondition that failed.
    pub fn reason(&self) -> &InvalidReason {
        &self.reason
    }

    /// Returns true if the hash (rather than a name component) was rejected.
    pub fn is_hash_error(&self) -> bool {
        matches!(
            self.reason,
            InvalidReason::EmptyHash
                | InvalidReason::HashTooShort { .. }
                | InvalidReason::InvalidHashCharacter { .. }
        )
    }
}

impl From<InvalidReason> for InvalidFriendlyNameError {
    fn from(reason: InvalidReason) -> Self {
        Self::new(reason)
    }
}
