//! StudentRepository - CRUD over the store with the id-uniqueness invariant.

use tokio::sync::Mutex;
use tracing::info;

use super::RepositoryError;
use crate::model::{Record, Student, StudentPatch};
use crate::store::JsonFileStore;

/// CRUD operations on student records.
///
/// Every operation reloads the document from disk. Mutations run their
/// read-modify-write under a single writer lock, so two concurrent creates
/// of the same id can not both pass the uniqueness check. Reads do not take
/// the lock; the store's atomic rewrite keeps them consistent.
#[derive(Debug)]
pub struct StudentRepository {
    store: JsonFileStore,
    writer: Mutex<()>,
}

impl StudentRepository {
    pub fn new(store: JsonFileStore) -> Self {
        Self {
            store,
            writer: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &JsonFileStore {
        &self.store
    }

    /// All records in insertion order, off-shape entries included.
    pub async fn list(&self) -> Vec<Record> {
        self.store.read().await.students
    }

    /// Append a new record. Fails if the id is taken.
    pub async fn create(&self, student: Student) -> Result<Student, RepositoryError> {
        let _guard = self.writer.lock().await;
        let mut document = self.store.read().await;

        if document.contains(&student.id) {
            return Err(RepositoryError::DuplicateId(student.id));
        }

        document.students.push(student.clone().into());
        self.store.write(&document).await?;
        info!(id = %student.id, "student created");
        Ok(student)
    }

    /// Shallow-merge `patch` onto the record with `id`.
    pub async fn update(&self, id: &str, patch: StudentPatch) -> Result<Record, RepositoryError> {
        let _guard = self.writer.lock().await;
        let mut document = self.store.read().await;

        let index = document
            .position(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        document.students[index].merge(patch);
        let merged = document.students[index].clone();
        self.store.write(&document).await?;
        info!(id = %id, "student updated");
        Ok(merged)
    }

    /// Remove every record with `id`, returning how many were removed.
    pub async fn delete(&self, id: &str) -> Result<usize, RepositoryError> {
        let _guard = self.writer.lock().await;
        let mut document = self.store.read().await;

        let removed = document.remove_all(id);
        if removed == 0 {
            return Err(RepositoryError::NotFound(id.to_string()));
        }

        self.store.write(&document).await?;
        info!(id = %id, removed, "student deleted");
        Ok(removed)
    }
}
