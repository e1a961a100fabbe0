//! Unified error type for Gantry operations.
//!
//! One serializable enum shared by every crate in the workspace, so callers
//! can pattern-match on kind. Authentication failures are deliberately
//! uniform: an unknown email and a wrong password produce the same error,
//! and infrastructure failures are never folded into them.

use serde::{Deserialize, Serialize};

/// Unified error type for all Gantry operations
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum GantryError {
    /// Authentication failed: bad credentials, an expired, tampered, or
    /// replayed token, or an inactive principal.
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Uniform description; never distinguishes which check failed
        message: String,
    },

    /// The caller is authenticated but the requested action was denied.
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Why the action was denied
        message: String,
    },

    /// A looked-up record does not exist, where saying so leaks nothing.
    #[error("Not found: {message}")]
    NotFound {
        /// What was not found
        message: String,
    },

    /// Malformed or missing input.
    #[error("Invalid: {message}")]
    Invalid {
        /// What was wrong with the input
        message: String,
    },

    /// A backing store or other dependency is unavailable. Retryable;
    /// never surfaced as an authentication or authorization failure.
    #[error("Transient: {message}")]
    Transient {
        /// What failed
        message: String,
    },

    /// Key material or hashing failure.
    #[error("Crypto error: {message}")]
    Crypto {
        /// What failed
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// What failed to (de)serialize
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// What went wrong
        message: String,
    },
}

impl GantryError {
    /// Create a uniform authentication failure
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create an authorization failure
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a retryable infrastructure error
    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient {
            message: message.into(),
        }
    }

    /// Create a crypto error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for failures a caller may sensibly retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }
}

/// Standard Result type for Gantry operations
pub type Result<T> = std::result::Result<T, GantryError>;

impl From<std::io::Error> for GantryError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            std::io::ErrorKind::TimedOut => Self::transient(err.to_string()),
            _ => Self::internal(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for GantryError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
