//! [`SqliteStore`]: `StudentStore` backed by a single SQLite connection.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use common::Student;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use super::{StorageError, StudentStore};

/// How long a statement waits on a locked database file before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        age INTEGER NOT NULL
    );
";

/// SQLite-backed student store.
///
/// rusqlite connections are `Send` but not `Sync`, so the connection sits
/// behind a mutex and requests take turns using it.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the `students`
    /// table exists. Safe to call on every start.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the file
    /// cannot be opened, or the table cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Internal(format!(
                    "failed to create storage directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Self::init(conn)
    }

    /// Open a private in-memory database.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(CREATE_TABLE)?;
        debug!("students table ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Internal("connection lock poisoned".into()))
    }
}

impl StudentStore for SqliteStore {
    fn create_student(&self, name: &str, email: &str, age: i64) -> Result<i64, StorageError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO students (name, email, age) VALUES (?1, ?2, ?3)",
            params![name, email, age],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn get_student_by_id(&self, id: i64) -> Result<Student, StorageError> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT id, name, email, age FROM students WHERE id = ?1 LIMIT 1",
            params![id],
            row_to_student,
        )
        .optional()?
        .ok_or(StorageError::NotFound(id))
    }

    fn get_students(&self) -> Result<Vec<Student>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, name, email, age FROM students ORDER BY id")?;
        let students = stmt
            .query_map([], row_to_student)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }

    fn readiness(&self) -> Result<(), StorageError> {
        let conn = self.conn()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }
}

fn row_to_student(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        age: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_get() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.create_student("Ann", "a@x.com", 20).unwrap();
        assert_eq!(id, 1);
        let s = store.get_student_by_id(id).unwrap();
        assert_eq!(
            s,
            Student {
                id: 1,
                name: "Ann".into(),
                email: "a@x.com".into(),
                age: 20
            }
        );
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let store = SqliteStore::open_in_memory().unwrap();
        let a = store.create_student("Ann", "a@x.com", 20).unwrap();
        let b = store.create_student("Bob", "b@x.com", 21).unwrap();
        assert!(b > a);
    }

    #[test]
    fn missing_row_is_not_found() {
        let store = SqliteStore::open_in_memory().unwrap();
        let err = store.get_student_by_id(42).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(42)));
        assert_eq!(err.to_string(), "student not found with id: 42");
    }

    #[test]
    fn empty_table_lists_nothing() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get_students().unwrap().is_empty());
    }

    #[test]
    fn list_is_stable_and_in_insertion_order() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.create_student("Ann", "a@x.com", 20).unwrap();
        store.create_student("Bob", "b@x.com", 21).unwrap();
        let first = store.get_students().unwrap();
        let second = store.get_students().unwrap();
        assert_eq!(first, second);
        let names: Vec<_> = first.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[test]
    fn reopening_file_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage").join("storage.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            store.create_student("Ann", "a@x.com", 20).unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get_students().unwrap().len(), 1);
    }

    #[test]
    fn readiness_succeeds_on_open_store() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.readiness().is_ok());
    }
}
