//! Domain entities.

pub mod token;
pub mod user;

pub use token::{AccessClaims, RefreshClaims, TokenPair};
pub use user::User;
