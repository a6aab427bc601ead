//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Client-supplied payload is missing a required field
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request used an operation the resource does not support
    #[error("Method {0} not allowed")]
    UnsupportedMethod(String),

    /// Infrastructure failure reported by the store
    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn unsupported_method<T: AsRef<str>>(method: T) -> Self {
        Self::UnsupportedMethod(method.as_ref().to_string())
    }
}
