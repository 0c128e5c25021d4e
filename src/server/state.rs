//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources cloned into each request handler via Axum's state extraction.
///
/// `DatabaseConnection` is a connection pool, so clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
