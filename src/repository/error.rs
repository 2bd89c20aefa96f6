use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("student {0} already exists")]
    DuplicateId(String),
    #[error("student {0} not found")]
    NotFound(String),
    #[error("failed to persist store: {0}")]
    Persist(#[from] StoreError),
}
