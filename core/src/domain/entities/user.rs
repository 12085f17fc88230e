//! User entity representing a registered ClipStream account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered user
///
/// `password_hash` is opaque to the domain layer; it is produced and
/// verified by the password-hashing collaborator. `refresh_token` holds
/// the single refresh token currently considered valid for this user,
/// or `None` if none has been issued or the user has logged out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique username, stored lowercase
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Display name
    pub full_name: String,

    /// Opaque password hash
    pub password_hash: String,

    /// URL of the uploaded avatar image
    pub avatar_url: String,

    /// URL of the uploaded cover image, if any
    pub cover_image_url: Option<String>,

    /// The single refresh token currently valid for this user
    pub refresh_token: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the user's last login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
        password_hash: impl Into<String>,
        avatar_url: impl Into<String>,
        cover_image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into().to_lowercase(),
            email: email.into(),
            full_name: full_name.into(),
            password_hash: password_hash.into(),
            avatar_url: avatar_url.into(),
            cover_image_url,
            refresh_token: None,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Replaces the stored refresh token
    pub fn set_refresh_token(&mut self, token: impl Into<String>) {
        self.refresh_token = Some(token.into());
    }

    /// Clears the stored refresh token (logout)
    pub fn clear_refresh_token(&mut self) {
        self.refresh_token = None;
    }

    /// Checks whether a presented refresh token matches the stored one
    ///
    /// A cleared token never matches anything.
    pub fn refresh_token_matches(&self, presented: &str) -> bool {
        matches!(self.refresh_token.as_deref(), Some(stored) if stored == presented)
    }

    /// Updates the last login timestamp
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "RaviKumar",
            "ravi@example.com",
            "Ravi Kumar",
            "hashed_password",
            "https://cdn.example.com/avatar.png",
            None,
        )
    }

    #[test]
    fn test_new_user_creation() {
        let user = sample_user();

        assert_eq!(user.username, "ravikumar");
        assert_eq!(user.email, "ravi@example.com");
        assert!(user.refresh_token.is_none());
        assert!(user.last_login_at.is_none());
        assert!(user.cover_image_url.is_none());
    }

    #[test]
    fn test_refresh_token_lifecycle() {
        let mut user = sample_user();

        assert!(!user.refresh_token_matches("anything"));

        user.set_refresh_token("token-1");
        assert!(user.refresh_token_matches("token-1"));
        assert!(!user.refresh_token_matches("token-2"));

        user.clear_refresh_token();
        assert!(user.refresh_token.is_none());
        assert!(!user.refresh_token_matches("token-1"));
    }

    #[test]
    fn test_record_login() {
        let mut user = sample_user();

        user.record_login();
        assert!(user.last_login_at.is_some());
        assert!(user.updated_at >= user.created_at);
    }
}
