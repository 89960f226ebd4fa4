//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, with the Unit of Work providing centralized
//! repository access.

mod auth_service;

pub use auth_service::{AuthService, AuthSession, AuthUser, Authenticator};
