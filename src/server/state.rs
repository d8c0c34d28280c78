//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds the database connection pool and the bearer
//! token verifier used by the college routes.

use sea_orm::DatabaseConnection;

use crate::server::middleware::auth::TokenVerifier;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `TokenVerifier` only holds the decoding key and validation settings.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared across all requests.
    pub db: DatabaseConnection,

    /// Verifies bearer tokens on protected routes.
    pub token_verifier: TokenVerifier,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_verifier` - Verifier configured with the JWT secret
    pub fn new(db: DatabaseConnection, token_verifier: TokenVerifier) -> Self {
        Self { db, token_verifier }
    }
}
