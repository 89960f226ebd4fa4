//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod access_token_repository;
pub(crate) mod entities;
mod user_repository;

pub use access_token_repository::{AccessTokenRepository, AccessTokenStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for unit tests
#[cfg(test)]
pub use access_token_repository::MockAccessTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
