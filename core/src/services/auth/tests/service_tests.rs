//! Unit tests for the authentication service

use std::sync::Arc;

use crate::errors::{AuthError, DomainError, TokenError, ValidationError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig, LoginRequest, RegisterRequest};
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::MockPasswordHasher;

type TestAuthService = AuthService<MockUserRepository, MockPasswordHasher>;

fn create_service() -> (TestAuthService, Arc<MockUserRepository>) {
    let repository = Arc::new(MockUserRepository::new());
    let token_service = Arc::new(TokenService::new(
        repository.clone(),
        TokenServiceConfig {
            access_secret: "test-access-secret".to_string(),
            refresh_secret: "test-refresh-secret".to_string(),
            access_token_expiry: 900,
            refresh_token_expiry: 604800,
        },
    ));
    let service = AuthService::new(
        repository.clone(),
        Arc::new(MockPasswordHasher),
        token_service,
        AuthServiceConfig::default(),
    );
    (service, repository)
}

fn register_request() -> RegisterRequest {
    RegisterRequest {
        username: "RaviKumar".to_string(),
        email: "ravi@example.com".to_string(),
        full_name: "Ravi Kumar".to_string(),
        password: "correct-horse".to_string(),
        avatar_url: "https://cdn.example.com/avatar.png".to_string(),
        cover_image_url: None,
    }
}

fn login_by_username(password: &str) -> LoginRequest {
    LoginRequest {
        username: Some("ravikumar".to_string()),
        email: None,
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_creates_user() {
    let (service, repository) = create_service();

    let profile = service.register(register_request()).await.unwrap();

    assert_eq!(profile.username, "ravikumar");
    assert_eq!(profile.email, "ravi@example.com");

    let stored = repository.find_by_id(profile.id).await.unwrap().unwrap();
    assert_eq!(stored.password_hash, "hashed:correct-horse");
    assert!(stored.refresh_token.is_none());
}

#[tokio::test]
async fn test_register_rejects_blank_fields() {
    let (service, _) = create_service();

    let mut request = register_request();
    request.full_name = "   ".to_string();

    let result = service.register(request).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { field })) if field == "full_name"
    ));
}

#[tokio::test]
async fn test_register_requires_avatar() {
    let (service, _) = create_service();

    let mut request = register_request();
    request.avatar_url = String::new();

    let result = service.register(request).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { field })) if field == "avatar"
    ));
}

#[tokio::test]
async fn test_register_rejects_bad_email() {
    let (service, _) = create_service();

    let mut request = register_request();
    request.email = "not-an-email".to_string();

    let result = service.register(request).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));
}

#[tokio::test]
async fn test_register_rejects_bad_username() {
    let (service, _) = create_service();

    let mut request = register_request();
    request.username = "has space".to_string();

    let result = service.register(request).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidFormat { .. }))
    ));
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let (service, _) = create_service();

    let mut request = register_request();
    request.password = "short".to_string();

    let result = service.register(request).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength { .. }))
    ));
}

#[tokio::test]
async fn test_register_rejects_duplicates() {
    let (service, _) = create_service();
    service.register(register_request()).await.unwrap();

    // Same username, different email
    let mut request = register_request();
    request.email = "other@example.com".to_string();
    let result = service.register(request).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));

    // Same email, different username
    let mut request = register_request();
    request.username = "someone_else".to_string();
    let result = service.register(request).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
}

#[tokio::test]
async fn test_login_issues_tokens() {
    let (service, repository) = create_service();
    let profile = service.register(register_request()).await.unwrap();

    let response = service.login(login_by_username("correct-horse")).await.unwrap();

    assert_eq!(response.user.id, profile.id);
    assert!(!response.access_token.is_empty());
    assert!(!response.refresh_token.is_empty());
    assert_eq!(response.expires_in, 900);

    let stored = repository.find_by_id(profile.id).await.unwrap().unwrap();
    assert_eq!(
        stored.refresh_token.as_deref(),
        Some(response.refresh_token.as_str())
    );
    assert!(stored.last_login_at.is_some());
}

#[tokio::test]
async fn test_login_by_email() {
    let (service, _) = create_service();
    service.register(register_request()).await.unwrap();

    let response = service
        .login(LoginRequest {
            username: None,
            email: Some("ravi@example.com".to_string()),
            password: "correct-horse".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.user.username, "ravikumar");
}

#[tokio::test]
async fn test_login_requires_identifier() {
    let (service, _) = create_service();

    let result = service
        .login(LoginRequest {
            username: None,
            email: None,
            password: "whatever".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let (service, _) = create_service();

    let result = service.login(login_by_username("correct-horse")).await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (service, _) = create_service();
    service.register(register_request()).await.unwrap();

    let result = service.login(login_by_username("wrong-staple")).await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_refresh_rotates_tokens() {
    let (service, _) = create_service();
    service.register(register_request()).await.unwrap();
    let login = service.login(login_by_username("correct-horse")).await.unwrap();

    let rotated = service.refresh(Some(&login.refresh_token)).await.unwrap();
    assert_ne!(rotated.refresh_token, login.refresh_token);

    // The pre-rotation token is spent
    let replay = service.refresh(Some(&login.refresh_token)).await;
    assert!(matches!(
        replay,
        Err(DomainError::Token(TokenError::RefreshTokenReused))
    ));
}

#[tokio::test]
async fn test_logout_invalidates_refresh_token() {
    let (service, repository) = create_service();
    let profile = service.register(register_request()).await.unwrap();
    let login = service.login(login_by_username("correct-horse")).await.unwrap();

    service.logout(profile.id).await.unwrap();

    let stored = repository.find_by_id(profile.id).await.unwrap().unwrap();
    assert!(stored.refresh_token.is_none());

    let result = service.refresh(Some(&login.refresh_token)).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::RefreshTokenReused))
    ));
}
