//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Whether this error should surface to callers as an authorization
    /// failure rather than a client or server fault.
    ///
    /// Every token verification failure collapses into this bucket; the
    /// transport layer maps it to 401 without leaking internal detail.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            DomainError::Unauthorized => true,
            DomainError::Token(_) => true,
            DomainError::Auth(AuthError::InvalidCredentials) => true,
            _ => false,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
