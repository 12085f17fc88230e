//! Business services.

pub mod auth;
pub mod token;

pub use auth::{AuthService, AuthServiceConfig, BcryptPasswordHasher, PasswordHasher};
pub use token::{Clock, SystemClock, TokenService, TokenServiceConfig};
