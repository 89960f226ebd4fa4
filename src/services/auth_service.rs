//! Authentication service - registration, credential checks, token lifecycle.
//!
//! Handlers stay pure orchestration: everything that touches the identity
//! store or the token table goes through the [`AuthService`] trait, so the
//! storage and hashing choices remain swappable.

use async_trait::async_trait;
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{ACCESS_TOKEN_LENGTH, ACCESS_TOKEN_NAME};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Outcome of a successful login: the user plus a freshly issued token
#[derive(Debug)]
pub struct AuthSession {
    pub user: User,
    /// Opaque bearer token in the form handed to the client
    pub token: String,
}

/// Identity resolved from a bearer token on the current request
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
    /// The row backing the token presented on this request; logout revokes
    /// exactly this one
    pub token_id: Uuid,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, username: String, email: String, password: String)
        -> AppResult<User>;

    /// Verify credentials and issue a fresh access token
    async fn login(&self, email: String, password: String) -> AppResult<AuthSession>;

    /// Resolve a bearer token to the user it belongs to, if any
    async fn authenticate(&self, token: &str) -> AppResult<Option<AuthUser>>;

    /// Fetch the profile of an authenticated user
    async fn profile(&self, user_id: Uuid) -> AppResult<User>;

    /// Revoke a single issued token
    async fn logout(&self, token_id: Uuid) -> AppResult<()>;
}

/// Hash verified when a login names an unknown email, so response timing
/// does not reveal which addresses are registered
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

/// Generate an opaque access token string
fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ACCESS_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User> {
        // Availability check first: a duplicate email is a validation
        // failure and never reaches the insert.
        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::validation("This email is already registered."));
        }

        let password_hash = Password::new(&password)?.into_string();
        self.uow.users().create(username, email, password_hash).await
    }

    async fn login(&self, email: String, password: String) -> AppResult<AuthSession> {
        let user = self.uow.users().find_by_email(&email).await?;

        // Always run one verification, against a dummy hash if the user
        // does not exist.
        let stored = match &user {
            Some(u) => Password::from_hash(u.password_hash.clone()),
            None => Password::from_hash(DUMMY_PASSWORD_HASH.to_string()),
        };
        let password_valid = stored.verify(&password);

        match user {
            Some(user) if password_valid => {
                let token = generate_token();
                self.uow
                    .tokens()
                    .create(user.id, ACCESS_TOKEN_NAME.to_string(), token.clone())
                    .await?;

                Ok(AuthSession { user, token })
            }
            _ => Err(AppError::InvalidCredentials),
        }
    }

    async fn authenticate(&self, token: &str) -> AppResult<Option<AuthUser>> {
        let Some(record) = self.uow.tokens().find_by_token(token).await? else {
            return Ok(None);
        };

        self.uow.tokens().touch_last_used(record.id).await?;

        Ok(Some(AuthUser {
            user_id: record.user_id,
            token_id: record.id,
        }))
    }

    async fn profile(&self, user_id: Uuid) -> AppResult<User> {
        self.uow.users().find_by_id(user_id).await?.ok_or_not_found()
    }

    async fn logout(&self, token_id: Uuid) -> AppResult<()> {
        self.uow.tokens().delete(token_id).await
    }
}
