//! Error Types
//!
//! The kernel has exactly two failure classes. Both are pure computational
//! errors: they are reported at the point of detection and are never retried.

use thiserror::Error;

/// Coarse classification of a [`NumericError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input lies outside the domain of the operation
    Domain,
    /// A decoded component violates the structure of its encoding
    MalformedEncoding,
}

/// Errors raised by the numeric kernel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// Input outside the defined domain of the operation
    #[error("domain error: {reason}")]
    Domain {
        /// What was wrong with the input
        reason: String,
    },

    /// Decoded component violates its structural invariant
    #[error("malformed encoding: {reason}")]
    MalformedEncoding {
        /// Which invariant was violated
        reason: String,
    },
}

impl NumericError {
    /// Create a domain error
    ///
    /// # Arguments
    /// * `reason` - Description of the rejected input
    pub fn domain(reason: impl Into<String>) -> Self {
        NumericError::Domain {
            reason: reason.into(),
        }
    }

    /// Create a malformed-encoding error
    ///
    /// # Arguments
    /// * `reason` - Which structural invariant the encoding violates
    pub fn malformed(reason: impl Into<String>) -> Self {
        NumericError::MalformedEncoding {
            reason: reason.into(),
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NumericError::Domain { .. } => ErrorKind::Domain,
            NumericError::MalformedEncoding { .. } => ErrorKind::MalformedEncoding,
        }
    }
}

/// Result type for kernel operations
pub type NumericResult<T> = Result<T, NumericError>;
