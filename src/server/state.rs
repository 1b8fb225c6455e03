//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;
use std::time::Duration;

/// Shared resources cloned into every handler through Axum's state extraction.
///
/// `DatabaseConnection` is a pool, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Upper bound on any single store call or transaction made while serving a request.
    pub store_timeout: Duration,
}

impl AppState {
    pub fn new(db: DatabaseConnection, store_timeout: Duration) -> Self {
        Self { db, store_timeout }
    }
}
