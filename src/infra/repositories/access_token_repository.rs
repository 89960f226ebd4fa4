//! Access token repository - persistence for issued bearer tokens.
//!
//! One row per issuance; revocation is a hard delete of exactly one row.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use super::entities::access_token::{self, Entity as AccessTokenEntity};
use crate::domain::AccessToken;
use crate::errors::{AppError, AppResult};

/// Access token persistence operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccessTokenRepository: Send + Sync {
    /// Store a freshly issued token
    async fn create(&self, user_id: Uuid, name: String, token: String) -> AppResult<AccessToken>;

    /// Look up a token by its opaque string
    async fn find_by_token(&self, token: &str) -> AppResult<Option<AccessToken>>;

    /// Record that a token was presented on a request
    async fn touch_last_used(&self, id: Uuid) -> AppResult<()>;

    /// Revoke a token by deleting its row
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`AccessTokenRepository`]
pub struct AccessTokenStore {
    db: DatabaseConnection,
}

impl AccessTokenStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccessTokenRepository for AccessTokenStore {
    async fn create(&self, user_id: Uuid, name: String, token: String) -> AppResult<AccessToken> {
        let active_model = access_token::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            name: Set(name),
            token: Set(token),
            last_used_at: Set(None),
            created_at: Set(Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;

        Ok(AccessToken::from(model))
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<AccessToken>> {
        let result = AccessTokenEntity::find()
            .filter(access_token::Column::Token.eq(token))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AccessToken::from))
    }

    async fn touch_last_used(&self, id: Uuid) -> AppResult<()> {
        let token = AccessTokenEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::NotFound)?;

        let mut active: access_token::ActiveModel = token.into();
        active.last_used_at = Set(Some(Utc::now()));

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = AccessTokenEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
