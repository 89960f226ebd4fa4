//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, Persistence};
use crate::services::{AuthService, Authenticator};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// Wires the Unit of Work and the concrete [`Authenticator`] together;
    /// this is the production initialization path.
    pub fn from_database(database: Arc<Database>) -> Self {
        let uow = Arc::new(Persistence::new(database.get_connection()));

        Self {
            auth_service: Arc::new(Authenticator::new(uow)),
            database,
        }
    }

    /// Create application state with a manually injected service.
    ///
    /// Used by tests to swap the authentication service for a double.
    pub fn new(auth_service: Arc<dyn AuthService>, database: Arc<Database>) -> Self {
        Self {
            auth_service,
            database,
        }
    }
}
