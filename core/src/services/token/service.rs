//! Main token service implementation

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::token::{
    AccessClaims, RefreshClaims, TokenPair, JWT_AUDIENCE, JWT_ISSUER,
};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::UserRepository;

use super::clock::{Clock, SystemClock};
use super::config::TokenServiceConfig;

/// Service for issuing, verifying, and rotating JWT token pairs
///
/// Owns the single-active-refresh-token rule: a presented refresh token
/// is valid only if it exactly matches the one currently stored on the
/// user record. Issuing overwrites the stored token, so every rotation
/// implicitly invalidates all previously issued refresh tokens.
pub struct TokenService<R: UserRepository, C: Clock = SystemClock> {
    repository: Arc<R>,
    config: TokenServiceConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
    clock: C,
}

impl<R: UserRepository> TokenService<R, SystemClock> {
    /// Creates a new token service using the system clock
    pub fn new(repository: Arc<R>, config: TokenServiceConfig) -> Self {
        Self::with_clock(repository, config, SystemClock)
    }
}

impl<R: UserRepository, C: Clock> TokenService<R, C> {
    /// Creates a new token service with an explicit clock
    pub fn with_clock(repository: Arc<R>, config: TokenServiceConfig, clock: C) -> Self {
        let access_encoding_key = EncodingKey::from_secret(config.access_secret.as_bytes());
        let access_decoding_key = DecodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding_key = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding_key = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        let mut validation = Validation::default();
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            repository,
            config,
            access_encoding_key,
            access_decoding_key,
            refresh_encoding_key,
            refresh_decoding_key,
            validation,
            clock,
        }
    }

    /// Issues a new access/refresh token pair for a user
    ///
    /// The refresh token is written to the user record through the
    /// narrow `update_refresh_token` patch before the pair is returned;
    /// if that single write fails the caller gets an error and no pair.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The generated pair, refresh token persisted
    /// * `Err(DomainError)` - Signing or persistence failed
    pub async fn issue_pair(&self, user: &User) -> Result<TokenPair, DomainError> {
        let now = self.clock.now();

        let access_claims = AccessClaims::new(
            user,
            now,
            Duration::seconds(self.config.access_token_expiry),
        );
        let refresh_claims = RefreshClaims::new(
            user.id,
            now,
            Duration::seconds(self.config.refresh_token_expiry),
        );

        let access_token = self.encode_access_claims(&access_claims)?;
        let refresh_token = self.encode_refresh_claims(&refresh_claims)?;

        self.repository
            .update_refresh_token(user.id, Some(refresh_token.clone()))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!(
                    "something went wrong while generating access and refresh tokens: {e}"
                ),
            })?;

        debug!(user_id = %user.id, "issued token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry,
            self.config.refresh_token_expiry,
        ))
    }

    /// Verifies an access token and returns its claims
    ///
    /// Purely stateless: signature and expiry are checked against the
    /// access secret without consulting the store. Access tokens are
    /// trusted until expiry by design.
    ///
    /// # Returns
    ///
    /// * `Ok(AccessClaims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is invalid, expired, or malformed
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, DomainError> {
        let token_data = decode::<AccessClaims>(token, &self.access_decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    DomainError::Token(TokenError::TokenExpired)
                }
                jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                    DomainError::Token(TokenError::TokenNotYetValid)
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    DomainError::Token(TokenError::InvalidSignature)
                }
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })?;

        Ok(token_data.claims)
    }

    /// Exchanges a valid refresh token for a new token pair
    ///
    /// Single-use rotation: the presented token must exactly match the
    /// one stored on the user record. On success a fresh pair is issued
    /// and the stored token replaced, so replaying the old token fails.
    ///
    /// The equality check and the subsequent write are not a single
    /// atomic step: two callers racing with the same stale token can
    /// both pass the check before either write lands. The store's
    /// single-record patch keeps each write atomic, but rotation itself
    /// is not guarded against concurrent replay.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New pair; the old refresh token is dead
    /// * `Err(DomainError)` - Missing, invalid, expired, or replayed token
    pub async fn rotate(&self, incoming_refresh_token: Option<&str>) -> Result<TokenPair, DomainError> {
        let incoming = incoming_refresh_token
            .filter(|t| !t.is_empty())
            .ok_or(DomainError::Token(TokenError::MissingRefreshToken))?;

        let claims = self.decode_refresh(incoming)?;

        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidRefreshToken {
                reason: "malformed subject claim".to_string(),
            }))?;

        let user = self
            .repository
            .find_by_id(user_id)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("failed to load user for rotation: {e}"),
            })?
            .ok_or_else(|| {
                debug!(%user_id, "refresh token subject does not exist");
                DomainError::Token(TokenError::InvalidRefreshToken {
                    reason: "unknown subject".to_string(),
                })
            })?;

        if !user.refresh_token_matches(incoming) {
            warn!(user_id = %user.id, "refresh token mismatch, possible replay");
            return Err(DomainError::Token(TokenError::RefreshTokenReused));
        }

        self.issue_pair(&user).await
    }

    /// Invalidates the stored refresh token for a user (logout)
    ///
    /// The token field is unset rather than blanked, so no presented
    /// token can match it afterwards.
    pub async fn invalidate(&self, user_id: Uuid) -> Result<(), DomainError> {
        self.repository
            .update_refresh_token(user_id, None)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("failed to invalidate refresh token: {e}"),
            })?;

        debug!(%user_id, "refresh token invalidated");
        Ok(())
    }

    /// Encodes access claims into a signed JWT
    pub(crate) fn encode_access_claims(&self, claims: &AccessClaims) -> Result<String, DomainError> {
        encode(&Header::default(), claims, &self.access_encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Encodes refresh claims into a signed JWT
    pub(crate) fn encode_refresh_claims(
        &self,
        claims: &RefreshClaims,
    ) -> Result<String, DomainError> {
        encode(&Header::default(), claims, &self.refresh_encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Decodes and verifies a refresh token against the refresh secret
    ///
    /// Every verification failure collapses to `InvalidRefreshToken`,
    /// carrying the underlying reason but no internal detail beyond it.
    fn decode_refresh(&self, token: &str) -> Result<RefreshClaims, DomainError> {
        decode::<RefreshClaims>(token, &self.refresh_decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                DomainError::Token(TokenError::InvalidRefreshToken {
                    reason: e.to_string(),
                })
            })
    }
}
