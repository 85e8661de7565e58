//! Storage gateway for student records.
//!
//! Handlers depend only on the [`StudentStore`] capability held in
//! [`crate::server::state::AppState`]; the concrete backend is chosen once at
//! startup.
//!
//! # Invariants
//!
//! - Identifiers are assigned by the store, never by callers.
//! - A missing row is reported as [`StorageError::NotFound`], distinct from
//!   every other failure.

pub mod sqlite;

#[cfg(test)]
pub mod memory;

use common::{ServiceError, Student};
use thiserror::Error;

pub use sqlite::SqliteStore;

/// Errors produced by the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No row matches the requested identifier.
    #[error("student not found with id: {0}")]
    NotFound(i64),

    /// The database rejected or failed to execute a statement.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Failure outside the database itself (lock poisoning, task panics, I/O).
    #[error("internal storage error: {0}")]
    Internal(String),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        let message = err.to_string();
        match err {
            StorageError::NotFound(_) => ServiceError::NotFound(message),
            _ => ServiceError::Storage(message),
        }
    }
}

/// Persistence capability consumed by the request handlers.
///
/// Implementations must be safe to share across concurrent requests. All
/// methods block; callers on the async runtime run them via
/// `tokio::task::spawn_blocking`.
#[cfg_attr(test, mockall::automock)]
pub trait StudentStore: Send + Sync {
    /// Insert a new student and return its generated identifier.
    fn create_student(&self, name: &str, email: &str, age: i64) -> Result<i64, StorageError>;

    /// Fetch exactly one student.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no row has this `id`.
    fn get_student_by_id(&self, id: i64) -> Result<Student, StorageError>;

    /// Fetch every student in insertion order. Empty storage yields an empty vec.
    fn get_students(&self) -> Result<Vec<Student>, StorageError>;

    /// Cheap probe used by the health endpoint.
    fn readiness(&self) -> Result<(), StorageError>;
}
