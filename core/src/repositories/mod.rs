//! Repository interfaces and test doubles.

pub mod user;

pub use user::{MockUserRepository, UserRepository};
