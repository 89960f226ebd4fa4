//! Access token domain entity.
//!
//! Tokens are opaque credentials: one row per issuance, bound to a user,
//! deleted on logout. Nothing in the application inspects the token string
//! beyond equality.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A bearer access token issued at login
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Issuance label, e.g. "api"
    pub name: String,
    /// The opaque token string presented by clients
    pub token: String,
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
