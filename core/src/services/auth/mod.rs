//! Authentication service module
//!
//! Orchestrates registration, login, logout, and token refresh on top
//! of the user repository, the password hasher, and the token service.

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use service::{AuthService, LoginRequest, RegisterRequest};
