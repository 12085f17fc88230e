//! Error type definitions for authentication, token management, and
//! input validation.
//!
//! Error messages are intentionally short and human-readable; the
//! presentation layer maps error codes to HTTP status codes.

use cs_shared::types::ErrorResponse;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User does not exist")]
    UserNotFound,

    #[error("User with email or username already exists")]
    UserAlreadyExists,

    #[error("Incorrect password")]
    InvalidCredentials,

    #[error("Authentication failed")]
    AuthenticationFailed,
}

/// Token-related errors
///
/// Every variant is an authorization failure from the caller's point of
/// view; the distinctions exist for logging and for tests.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Unauthorized request: refresh token is missing")]
    MissingRefreshToken,

    #[error("Invalid refresh token: {reason}")]
    InvalidRefreshToken { reason: String },

    #[error("Refresh token is expired or used")]
    RefreshTokenReused,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid length: {field} (minimum: {min})")]
    InvalidLength { field: String, min: usize },
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::AuthenticationFailed => "AUTHENTICATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::TokenNotYetValid => "TOKEN_NOT_YET_VALID",
            TokenError::MissingRefreshToken => "MISSING_REFRESH_TOKEN",
            TokenError::InvalidRefreshToken { .. } => "INVALID_REFRESH_TOKEN",
            TokenError::RefreshTokenReused => "REFRESH_TOKEN_REUSED",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let error_code = match &err {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
            ValidationError::InvalidLength { .. } => "INVALID_LENGTH",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
