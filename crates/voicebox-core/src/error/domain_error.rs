//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::SessionId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // Not found
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    // Validation
    #[error("Validation error: {0}")]
    Validation(String),

    // Infrastructure (wrapped)
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::SessionNotFound(_) => "UNKNOWN_SESSION",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SessionNotFound(_) | Self::PostNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
