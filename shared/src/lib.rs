//! Shared utilities and common types for the ClipStream server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response and error envelope structures
//! - Input validation utilities

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::JwtConfig;
pub use types::{ApiResponse, ErrorResponse};
pub use utils::validation;
