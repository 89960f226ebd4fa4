//! Integration tests for API endpoints.
//!
//! These tests drive the real router with a mock authentication service, so
//! they cover routing, validation, the middleware context, and the response
//! envelope without requiring a database connection.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use auth_api::api::create_router;
use auth_api::domain::User;
use auth_api::errors::{AppError, AppResult};
use auth_api::infra::Database;
use auth_api::services::{AuthService, AuthSession, AuthUser};
use auth_api::AppState;

const VALID_TOKEN: &str = "valid-test-token";
const ISSUED_TOKEN: &str = "freshly-issued-opaque-token-0123456789ab";

fn test_user(id: Uuid, username: &str, email: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$hashed".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Mock auth service with canned responses
struct MockAuthService {
    user_id: Uuid,
    token_id: Uuid,
}

impl MockAuthService {
    fn new() -> Self {
        Self {
            user_id: Uuid::new_v4(),
            token_id: Uuid::new_v4(),
        }
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn register(
        &self,
        username: String,
        email: String,
        _password: String,
    ) -> AppResult<User> {
        if email == "taken@example.com" {
            return Err(AppError::validation("This email is already registered."));
        }
        Ok(test_user(self.user_id, &username, &email))
    }

    async fn login(&self, email: String, password: String) -> AppResult<AuthSession> {
        if password != "longpass1" {
            return Err(AppError::InvalidCredentials);
        }
        Ok(AuthSession {
            user: test_user(self.user_id, "alice123", &email),
            token: ISSUED_TOKEN.to_string(),
        })
    }

    async fn authenticate(&self, token: &str) -> AppResult<Option<AuthUser>> {
        if token == VALID_TOKEN {
            Ok(Some(AuthUser {
                user_id: self.user_id,
                token_id: self.token_id,
            }))
        } else {
            Ok(None)
        }
    }

    async fn profile(&self, user_id: Uuid) -> AppResult<User> {
        Ok(test_user(user_id, "alice123", "a@x.com"))
    }

    async fn logout(&self, _token_id: Uuid) -> AppResult<()> {
        Ok(())
    }
}

fn test_app() -> Router {
    let state = AppState::new(
        Arc::new(MockAuthService::new()),
        Arc::new(Database::from_connection(DatabaseConnection::default())),
    );
    create_router(state)
}

async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    bearer: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

// =============================================================================
// Register
// =============================================================================

#[tokio::test]
async fn register_returns_201_with_the_created_user() {
    let body = json!({
        "username": "alice123",
        "email": "a@x.com",
        "password": "longpass1"
    });

    let (status, json) = send(test_app(), "POST", "/api/auth/register", Some(body), None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "User has been registered successfully!");
    assert_eq!(json["data"]["username"], "alice123");
    assert_eq!(json["data"]["email"], "a@x.com");
    // The stored hash never leaves the server
    assert!(json["data"].get("password").is_none());
    assert!(json["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn register_with_duplicate_email_is_a_validation_failure() {
    let body = json!({
        "username": "alice123",
        "email": "taken@example.com",
        "password": "longpass1"
    });

    let (status, json) = send(test_app(), "POST", "/api/auth/register", Some(body), None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "This email is already registered.");
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn register_with_short_password_short_circuits() {
    let body = json!({
        "username": "alice123",
        "email": "a@x.com",
        "password": "short"
    });

    let (status, json) = send(test_app(), "POST", "/api/auth/register", Some(body), None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["message"], "The password must be at least 8 characters.");
}

#[tokio::test]
async fn register_with_missing_username_short_circuits() {
    let body = json!({
        "email": "a@x.com",
        "password": "longpass1"
    });

    let (status, json) = send(test_app(), "POST", "/api/auth/register", Some(body), None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["message"], "Please enter your username.");
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn login_returns_the_user_and_a_token() {
    let body = json!({
        "email": "a@x.com",
        "password": "longpass1"
    });

    let (status, json) = send(test_app(), "POST", "/api/auth/login", Some(body), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Login successfully");
    assert_eq!(json["data"]["user"]["email"], "a@x.com");
    assert_eq!(json["data"]["token"], ISSUED_TOKEN);
}

#[tokio::test]
async fn login_with_bad_credentials_is_401_without_data() {
    let body = json!({
        "email": "a@x.com",
        "password": "wrong-password"
    });

    let (status, json) = send(test_app(), "POST", "/api/auth/login", Some(body), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Invalid credentials");
    assert!(json.get("data").is_none());
}

// =============================================================================
// Profile
// =============================================================================

#[tokio::test]
async fn profile_without_a_token_is_401() {
    let (status, json) = send(test_app(), "GET", "/api/user/profile", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["status"], "error");
    assert_eq!(
        json["message"],
        "Unable to fetch user profile due to invalid credentials"
    );
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn profile_with_an_unknown_token_is_401() {
    let (status, _) = send(
        test_app(),
        "GET",
        "/api/user/profile",
        None,
        Some("revoked-or-bogus"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_with_a_valid_token_returns_the_user() {
    let (status, json) = send(
        test_app(),
        "GET",
        "/api/user/profile",
        None,
        Some(VALID_TOKEN),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "User profile fetched successfully");
    assert_eq!(json["data"]["username"], "alice123");
}

// =============================================================================
// Logout
// =============================================================================

#[tokio::test]
async fn logout_without_a_token_is_401() {
    let (status, json) = send(test_app(), "POST", "/api/auth/logout", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "User not authenticated. Unable to log out.");
}

#[tokio::test]
async fn logout_with_a_valid_token_succeeds_without_data() {
    let (status, json) = send(
        test_app(),
        "POST",
        "/api/auth/logout",
        None,
        Some(VALID_TOKEN),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "User logged out successfully");
    assert!(json.get("data").is_none());
}

// =============================================================================
// Root
// =============================================================================

#[tokio::test]
async fn root_greets_without_authentication() {
    let (status, _) = send(test_app(), "GET", "/", None, None).await;

    assert_eq!(status, StatusCode::OK);
}
