use thiserror::Error;

/// Domain-level failures surfaced by services and repository adapters.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Bad input: a missing required field or a dangling reference.
    #[error("{0}")]
    Validation(String),

    /// A referenced id does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Backend failure in the storage layer.
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        DomainError::NotFound(msg.into())
    }
}
