//! Shared request state.
//!
//! # Invariants
//! - One SQLite connection per process, created at startup and injected here.
//! - The connection lock is taken on a blocking worker thread and released
//!   before the handler resumes; it is never held across an `.await`.

use crate::error::ApiError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a migrated connection, typically from `ems_core::db::open_db`.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// A poisoned lock only fails the current request.
    pub async fn with_conn<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Connection) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| ApiError::Internal("store lock poisoned".to_string()))?;
            f(&guard)
        })
        .await
        .map_err(|err| ApiError::Internal(format!("store task failed: {err}")))?
    }
}
