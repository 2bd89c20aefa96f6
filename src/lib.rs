//! student_records: a file-backed student record service.
//!
//! Records live in one JSON document on disk. The document is re-read on
//! every request and rewritten in full on every mutation. The HTTP layer
//! exposes list/create/update/delete under `/students` and serves the
//! accompanying page assets.

pub mod config;
pub mod http;
mod model;
mod repository;
mod store;
pub mod telemetry;

pub use config::{LogFormat, ServerConfig};
pub use model::{
    is_valid_id, Record, Student, StudentDraft, StudentPatch, ValidationError, ZeroMarks,
};
pub use repository::{RepositoryError, StudentRepository};
pub use store::{JsonFileStore, StoreDocument, StoreError};
