//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    /// Completion API answered with a non-2xx status
    #[error("Failed to generate response: OpenRouter API error: {status} {reason}")]
    Upstream { status: u16, reason: String },

    /// Completion API answered 2xx but the body had an unexpected shape
    #[error("Failed to generate response: {0}")]
    MalformedResponse(String),

    /// Transport-level failure talking to the completion API
    #[error("Failed to generate response: {0}")]
    Network(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
