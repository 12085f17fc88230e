//! Main authentication service implementation

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use cs_shared::utils::validation;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthResponse, UserProfile};
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::{Clock, SystemClock, TokenService};

use super::config::AuthServiceConfig;
use super::password::PasswordHasher;

/// Registration input
///
/// Image uploads happen before registration in the upload layer; this
/// request carries the resulting URLs.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub avatar_url: String,
    pub cover_image_url: Option<String>,
}

/// Login input: either username or email plus the password
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

/// Authentication service for the register/login/logout/refresh flows
pub struct AuthService<U, P, C = SystemClock>
where
    U: UserRepository,
    P: PasswordHasher,
    C: Clock,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Password hashing collaborator
    password_hasher: Arc<P>,
    /// Token service for JWT management
    token_service: Arc<TokenService<U, C>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, P, C> AuthService<U, P, C>
where
    U: UserRepository,
    P: PasswordHasher,
    C: Clock,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<P>,
        token_service: Arc<TokenService<U, C>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
            config,
        }
    }

    /// Register a new user
    ///
    /// Validates the request, rejects duplicate usernames/emails, hashes
    /// the password, and stores the user. The returned profile carries
    /// no password hash and no refresh token.
    ///
    /// # Returns
    ///
    /// * `Ok(UserProfile)` - The created account, secrets stripped
    /// * `Err(DomainError)` - Validation failed, duplicate, or store error
    pub async fn register(&self, request: RegisterRequest) -> DomainResult<UserProfile> {
        for (field, value) in [
            ("username", &request.username),
            ("email", &request.email),
            ("full_name", &request.full_name),
            ("password", &request.password),
        ] {
            if validation::is_blank(value) {
                return Err(ValidationError::RequiredField {
                    field: field.to_string(),
                }
                .into());
            }
        }

        if validation::is_blank(&request.avatar_url) {
            return Err(ValidationError::RequiredField {
                field: "avatar".to_string(),
            }
            .into());
        }

        if !validation::is_valid_username(request.username.trim()) {
            return Err(ValidationError::InvalidFormat {
                field: "username".to_string(),
            }
            .into());
        }

        if !validation::is_valid_email(request.email.trim()) {
            return Err(ValidationError::InvalidEmail.into());
        }

        if request.password.len() < self.config.min_password_length {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: self.config.min_password_length,
            }
            .into());
        }

        let username = request.username.trim().to_lowercase();
        let email = request.email.trim().to_string();

        if self
            .user_repository
            .exists_by_username_or_email(&username, &email)
            .await?
        {
            warn!(%username, "registration rejected, user already exists");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.password_hasher.hash(&request.password)?;

        let user = self
            .user_repository
            .create(User::new(
                username,
                email,
                request.full_name.trim().to_string(),
                password_hash,
                request.avatar_url,
                request.cover_image_url,
            ))
            .await?;

        debug!(user_id = %user.id, "user registered");
        Ok(UserProfile::from(&user))
    }

    /// Authenticate a user and issue a token pair
    ///
    /// Looks the user up by username or email, checks the password, and
    /// delegates token issuance to the token service.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Profile plus access/refresh tokens
    /// * `Err(DomainError)` - Unknown user, wrong password, or store error
    pub async fn login(&self, request: LoginRequest) -> DomainResult<AuthResponse> {
        let user = match (
            request.username.as_deref().filter(|u| !u.trim().is_empty()),
            request.email.as_deref().filter(|e| !e.trim().is_empty()),
        ) {
            (Some(username), _) => self.user_repository.find_by_username(username.trim()).await?,
            (None, Some(email)) => self.user_repository.find_by_email(email.trim()).await?,
            (None, None) => {
                return Err(ValidationError::RequiredField {
                    field: "username or email".to_string(),
                }
                .into())
            }
        };

        let mut user = user.ok_or(AuthError::UserNotFound)?;

        if !self
            .password_hasher
            .verify(&request.password, &user.password_hash)?
        {
            debug!(user_id = %user.id, "login rejected, wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        user.record_login();
        let user = self.user_repository.update(user).await?;

        let token_pair = self.token_service.issue_pair(&user).await?;

        debug!(user_id = %user.id, "user logged in");
        Ok(AuthResponse::from_token_pair(&user, token_pair))
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// Thin delegation to [`TokenService::rotate`]; the cookie handling
    /// around it belongs to the transport layer.
    pub async fn refresh(&self, incoming_refresh_token: Option<&str>) -> DomainResult<TokenPair> {
        self.token_service.rotate(incoming_refresh_token).await
    }

    /// Log a user out by invalidating their stored refresh token
    pub async fn logout(&self, user_id: Uuid) -> DomainResult<()> {
        self.token_service.invalidate(user_id).await?;
        debug!(%user_id, "user logged out");
        Ok(())
    }
}
