//! HTTP middleware.

mod auth;

pub use auth::{auth_context, AuthContext};
