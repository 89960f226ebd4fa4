//! HTTP request handlers.

pub mod auth_handler;

pub use auth_handler::{auth_routes, user_routes};
