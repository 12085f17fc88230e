//! Configuration types shared across server modules

mod auth;

pub use auth::JwtConfig;
