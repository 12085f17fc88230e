//! User repository interface and in-memory implementation.

#[path = "trait.rs"]
mod trait_;

pub mod r#trait {
    pub use super::trait_::*;
}

mod mock;

pub use mock::MockUserRepository;
pub use r#trait::UserRepository;
