//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through
//! Axum's state extraction. It replaces any process-wide database handle: every
//! handler receives the connection pool explicitly.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Whether list endpoints answer an empty collection with 400 instead of
    /// 200 and an empty `results` array.
    pub empty_list_as_error: bool,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `empty_list_as_error` - Empty collection policy for list endpoints
    pub fn new(db: DatabaseConnection, empty_list_as_error: bool) -> Self {
        Self {
            db,
            empty_list_as_error,
        }
    }
}
