//! In-memory [`StudentStore`] used by handler tests.

use std::sync::Mutex;

use common::Student;

use super::{StorageError, StudentStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Student>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().map(|r| r.len()).unwrap_or_default()
    }
}

impl StudentStore for MemoryStore {
    fn create_student(&self, name: &str, email: &str, age: i64) -> Result<i64, StorageError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StorageError::Internal("lock poisoned".into()))?;
        let id = rows.last().map_or(1, |s| s.id + 1);
        rows.push(Student {
            id,
            name: name.into(),
            email: email.into(),
            age,
        });
        Ok(id)
    }

    fn get_student_by_id(&self, id: i64) -> Result<Student, StorageError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| StorageError::Internal("lock poisoned".into()))?;
        rows.iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    fn get_students(&self) -> Result<Vec<Student>, StorageError> {
        self.rows
            .lock()
            .map(|rows| rows.clone())
            .map_err(|_| StorageError::Internal("lock poisoned".into()))
    }

    fn readiness(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
