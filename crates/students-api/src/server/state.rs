//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use axum::http::StatusCode;

use crate::storage::StudentStore;

/// Application state shared across all request handlers.
///
/// All fields are cheaply cloneable so that Axum can clone the state for each
/// request without copying expensive data.
#[derive(Clone)]
pub struct AppState {
    /// Storage gateway; the only path from handlers to persisted rows.
    pub store: Arc<dyn StudentStore>,
    /// Status sent when a requested student does not exist.
    pub not_found_status: StatusCode,
    /// Deployment environment label reported by `/health`.
    pub env: Arc<String>,
}

impl AppState {
    /// Create a new [`AppState`].
    ///
    /// Missing students are reported as `500` unless `not_found_as_404` is set.
    pub fn new(store: Arc<dyn StudentStore>, not_found_as_404: bool, env: String) -> Self {
        let not_found_status = if not_found_as_404 {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            store,
            not_found_status,
            env: Arc::new(env),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State over an empty [`crate::storage::memory::MemoryStore`] with the
    /// default not-found policy.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(crate::storage::memory::MemoryStore::new()),
            false,
            "test".into(),
        )
    }
}
