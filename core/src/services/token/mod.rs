//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - JWT access token generation and stateless verification
//! - Refresh token issuance and single-use rotation
//! - Refresh token invalidation on logout

mod clock;
mod config;
mod service;


pub use clock::{Clock, SystemClock};
pub use config::TokenServiceConfig;
pub use service::TokenService;
