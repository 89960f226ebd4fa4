//! Authentication handlers.
//!
//! Each handler validates input (delegated to [`ValidatedJson`]), makes one
//! call into the [`AuthService`](crate::services::AuthService), and maps the
//! outcome to the response envelope. Expected business failures keep their
//! specific message and status; anything else is logged and collapsed into
//! the handler's generic error envelope.

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_context, AuthContext};
use crate::api::AppState;
use crate::config::{USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH};
use crate::domain::UserResponse;
use crate::errors::{AppError, AppResult};
use crate::types::ApiResponse;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Username, 3-25 characters
    #[validate(
        required(message = "Please enter your username."),
        custom(function = "validate_username")
    )]
    #[schema(example = "alice123")]
    pub username: Option<String>,
    /// User email address, unique among users
    #[validate(
        required(message = "Please enter your email address."),
        email(message = "Please enter a valid email address."),
        length(max = 255, message = "The email may not be greater than 255 characters.")
    )]
    #[schema(example = "user@example.com")]
    pub email: Option<String>,
    /// User password (minimum 8 characters)
    #[validate(
        required(message = "Please enter your password."),
        length(min = 8, message = "The password must be at least 8 characters.")
    )]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Consume the validated payload.
    ///
    /// The `required` rules have already run, so every field is `Some` by
    /// the time a handler sees the request.
    fn into_parts(self) -> (String, String, String) {
        (
            self.username.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}

/// Username length rule with a distinct message per bound
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() < USERNAME_MIN_LENGTH {
        let mut error = ValidationError::new("length");
        error.message = Some("The username must be at least 3 characters.".into());
        return Err(error);
    }
    if username.chars().count() > USERNAME_MAX_LENGTH {
        let mut error = ValidationError::new("length");
        error.message = Some("The username may not be greater than 25 characters.".into());
        return Err(error);
    }
    Ok(())
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(email(message = "Please enter a valid email address."))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Login response payload: the authenticated user and their fresh token
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: UserResponse,
    /// Opaque bearer token for subsequent requests
    pub token: String,
}

/// Create authentication routes
pub fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/logout", post(logout))
        .route_layer(middleware::from_fn_with_state(state, auth_context))
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Create routes for the authenticated user
pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile))
        .route_layer(middleware::from_fn_with_state(state, auth_context))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Registration failed"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let (username, email, password) = payload.into_parts();

    let user = state
        .auth_service
        .register(username, email, password)
        .await
        .map_err(|e| {
            if e.is_unexpected() {
                tracing::error!("unable to register user: {e}");
            }
            e.or_unexpected("Unable to register User!", StatusCode::BAD_REQUEST)
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            UserResponse::from(user),
            "User has been registered successfully!",
        )),
    ))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    let LoginRequest { email, password } = payload;

    let session = state
        .auth_service
        .login(email.clone(), password)
        .await
        .map_err(|e| {
            if e.is_unexpected() {
                tracing::error!(email = %email, "unable to login user: {e}");
            }
            e.or_unexpected(
                "Unable to Login. Please check your credentials and try again.",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        })?;

    Ok(Json(ApiResponse::success(
        AuthResponse {
            user: UserResponse::from(session.user),
            token: session.token,
        },
        "Login successfully",
    )))
}

/// Fetch the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/user/profile",
    tag = "User",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile fetched successfully", body = UserResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn profile(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let Some(auth) = ctx.user else {
        return Err(AppError::unauthorized(
            "Unable to fetch user profile due to invalid credentials",
        ));
    };

    let user = state.auth_service.profile(auth.user_id).await.map_err(|e| {
        if e.is_unexpected() {
            tracing::error!("unable to fetch user profile: {e}");
        }
        match e {
            // The token outlived its user; treat it like any other
            // unauthenticated request.
            AppError::NotFound => AppError::unauthorized(
                "Unable to fetch user profile due to invalid credentials",
            ),
            other => other.or_unexpected(
                "Unable to Fetch User Profile at the moment",
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        }
    })?;

    Ok(Json(ApiResponse::success(
        UserResponse::from(user),
        "User profile fetched successfully",
    )))
}

/// Logout by revoking the presented access token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out successfully"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> AppResult<Json<ApiResponse<()>>> {
    let Some(auth) = ctx.user else {
        return Err(AppError::unauthorized(
            "User not authenticated. Unable to log out.",
        ));
    };

    state.auth_service.logout(auth.token_id).await.map_err(|e| {
        if e.is_unexpected() {
            tracing::error!("unable to logout user: {e}");
        }
        e.or_unexpected(
            "An error occurred while logging out.",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    })?;

    Ok(Json(ApiResponse::message(
        "User logged out successfully",
    )))
}
