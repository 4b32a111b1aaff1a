//! Application state shared across all request handlers.
//!
//! `AppState` holds the database pool and the token service. It is built once during
//! startup and cloned into each handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` keeps its keys behind an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// bcrypt cost used when hashing new passwords.
    pub hash_cost: u32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the signing secret
    /// - `hash_cost` - bcrypt cost for password hashing
    pub fn new(db: DatabaseConnection, tokens: TokenService, hash_cost: u32) -> Self {
        Self {
            db,
            tokens,
            hash_cost,
        }
    }
}
