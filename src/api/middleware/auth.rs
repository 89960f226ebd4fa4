//! Bearer token resolution middleware.
//!
//! Resolves the `Authorization` header into an [`AuthContext`] and injects it
//! into the request extensions. The middleware never rejects a request over a
//! missing or unknown token: each protected handler owns its own
//! unauthenticated response, so the context carries the identity only
//! if one was resolved.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppResult;
use crate::services::AuthUser;

/// Request-scoped authentication context
#[derive(Clone, Debug, Default)]
pub struct AuthContext {
    /// The identity behind the presented bearer token, if the request
    /// carried a valid one
    pub user: Option<AuthUser>,
}

/// Resolve the bearer token, if any, into an [`AuthContext`].
///
/// A store failure during resolution propagates as an error response; an
/// absent or unknown token simply leaves the context unauthenticated.
pub async fn auth_context(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX));

    let user = match bearer {
        Some(token) => state.auth_service.authenticate(token).await?,
        None => None,
    };

    request.extensions_mut().insert(AuthContext { user });

    Ok(next.run(request).await)
}
