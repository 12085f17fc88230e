//! User repository trait defining the interface for user persistence.
//!
//! Implementations wrap the actual document store while keeping the
//! domain layer free of storage concerns.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// `update_refresh_token` exists alongside the general `update` on
/// purpose: replacing or clearing the stored refresh token is a narrow
/// single-field patch that must not re-run the field validation and
/// password-rehash side effects a full save carries.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their username (case-insensitive, stored lowercase)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user in the repository
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with any database-generated fields
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate username or email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user in the repository (full save)
    ///
    /// Runs the store's full field validation. Never use this to rotate
    /// refresh tokens; use [`update_refresh_token`](Self::update_refresh_token).
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Set or clear the stored refresh token for a user
    ///
    /// An atomic single-record patch that skips all unrelated field
    /// validation. `None` unsets the token entirely so that no presented
    /// token can match it afterwards.
    ///
    /// # Returns
    /// * `Ok(())` - Token field persisted
    /// * `Err(DomainError)` - User missing or the write failed
    async fn update_refresh_token(
        &self,
        id: Uuid,
        refresh_token: Option<String>,
    ) -> Result<(), DomainError>;

    /// Check whether a user exists with the given username or email
    async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, DomainError> {
        if self.find_by_username(username).await?.is_some() {
            return Ok(true);
        }
        Ok(self.find_by_email(email).await?.is_some())
    }
}
