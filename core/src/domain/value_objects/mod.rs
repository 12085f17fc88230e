//! Value objects exposed to the presentation layer.

mod auth_response;

pub use auth_response::{AuthResponse, UserProfile};
