//! Application state shared across all API handlers.

use crate::error::{ApiError, ApiResult};
use duhigure_core::ServiceResult;
use log::warn;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// One SQLite connection behind a mutex, plus request-independent settings.
///
/// The mutex serializes every store operation, so each request's
/// transaction runs to completion before the next one starts.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
    default_sector: Arc<str>,
}

impl AppState {
    pub fn new(conn: Connection, default_sector: impl Into<String>) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
            default_sector: Arc::from(default_sector.into()),
        }
    }

    /// Sector applied to families written without one.
    pub fn default_sector(&self) -> &str {
        &self.default_sector
    }

    /// Runs blocking store work on the blocking pool with exclusive access
    /// to the connection.
    pub async fn run<T, F>(&self, op: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> ServiceResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            // A panicking request drops its open transaction, which rolls back,
            // so the connection behind a poisoned lock is still consistent.
            let guard = conn.lock().unwrap_or_else(|poisoned| {
                warn!("event=db_lock module=api status=recovered reason=poisoned");
                poisoned.into_inner()
            });
            op(&guard).map_err(ApiError::from)
        })
        .await
        .map_err(|err| ApiError::Internal(format!("store task failed: {err}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duhigure_core::{db::open_db_in_memory, FamilyDraft, FamilyService, SqliteFamilyRepository};

    #[tokio::test]
    async fn store_stays_usable_after_a_panicking_request() {
        let state = AppState::new(open_db_in_memory().unwrap(), "Kibungo");

        let conn = Arc::clone(&state.conn);
        let crashed = std::thread::spawn(move || {
            let _guard = conn.lock().unwrap();
            panic!("request handler crashed");
        })
        .join();
        assert!(crashed.is_err());
        assert!(state.conn.is_poisoned());

        let id = state
            .run(|conn| {
                FamilyService::new(SqliteFamilyRepository::new(conn), "Kibungo")
                    .create_family(&FamilyDraft::new("Uwimana", None))
            })
            .await
            .unwrap();
        assert_eq!(id, 1);
    }
}
