//! Unit of Work - centralized repository access.
//!
//! Every handler performs at most one delegated persistence call, so there is
//! no multi-aggregate operation to coordinate and no transaction machinery
//! here; the unique index on `users.email` is the only consistency guarantee
//! the store provides.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    AccessTokenRepository, AccessTokenStore, UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get access token repository
    fn tokens(&self) -> Arc<dyn AccessTokenRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    token_repo: Arc<AccessTokenStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let token_repo = Arc::new(AccessTokenStore::new(db));
        Self {
            user_repo,
            token_repo,
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn tokens(&self) -> Arc<dyn AccessTokenRepository> {
        self.token_repo.clone()
    }
}
