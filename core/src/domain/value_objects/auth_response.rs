//! Authentication response value objects for API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;

/// Public view of a user record
///
/// Everything secret is stripped: no password hash, no stored refresh
/// token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Username
    pub username: String,

    /// Email address
    pub email: String,

    /// Display name
    pub full_name: String,

    /// Avatar image URL
    pub avatar_url: String,

    /// Cover image URL, if any
    pub cover_image_url: Option<String>,

    /// Timestamp when the user registered
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            avatar_url: user.avatar_url.clone(),
            cover_image_url: user.cover_image_url.clone(),
            created_at: user.created_at,
        }
    }
}

/// Authentication response returned after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Public view of the authenticated user
    pub user: UserProfile,

    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates an authentication response from a user and a token pair
    pub fn from_token_pair(user: &User, token_pair: TokenPair) -> Self {
        Self {
            user: UserProfile::from(user),
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            expires_in: token_pair.access_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_strips_secrets() {
        let mut user = User::new(
            "ravi",
            "ravi@example.com",
            "Ravi Kumar",
            "bcrypt-hash",
            "https://cdn.example.com/a.png",
            Some("https://cdn.example.com/c.png".to_string()),
        );
        user.set_refresh_token("stored-refresh-token");

        let profile = UserProfile::from(&user);
        let json = serde_json::to_string(&profile).unwrap();

        assert_eq!(profile.id, user.id);
        assert!(!json.contains("bcrypt-hash"));
        assert!(!json.contains("stored-refresh-token"));
    }

    #[test]
    fn test_auth_response_from_token_pair() {
        let user = User::new(
            "ravi",
            "ravi@example.com",
            "Ravi Kumar",
            "hash",
            "https://cdn.example.com/a.png",
            None,
        );
        let pair = TokenPair::new("a".to_string(), "r".to_string(), 900, 604800);

        let response = AuthResponse::from_token_pair(&user, pair);

        assert_eq!(response.user.username, "ravi");
        assert_eq!(response.access_token, "a");
        assert_eq!(response.refresh_token, "r");
        assert_eq!(response.expires_in, 900);
    }
}
