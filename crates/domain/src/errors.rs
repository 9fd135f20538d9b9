//! Error types used throughout the SDK

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the Forte SDK
///
/// `InvalidArgument` is the only variant produced before a request is sent;
/// it signals a caller bug and carries the offending field path (for example
/// `scope.trunk`). Every other variant comes from the HTTP layer.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ForteError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ForteError {
    /// Shorthand for building an [`ForteError::InvalidArgument`].
    pub fn invalid_argument(field: impl Into<String>) -> Self {
        Self::InvalidArgument(field.into())
    }

    /// True for argument validation failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Field path (or message) carried by an `InvalidArgument` error.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument(field) => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for Forte operations
pub type Result<T> = std::result::Result<T, ForteError>;
