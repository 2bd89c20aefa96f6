//! Store - The data access layer for the persisted student document.
//!
//! `JsonFileStore` is the only code that touches the data file. Everything
//! that mutates records goes through it (via `StudentRepository`) so the
//! id-uniqueness invariant has a single owner.
//!
//! ## On-disk shape
//!
//! The canonical layout is `{ "students": [ ... ] }`. A bare array of
//! records is also accepted on read and is rewritten in the canonical shape
//! on the next write. Entries are decoded one at a time: an entry that is
//! valid JSON but not a well-formed student is kept as written rather than
//! failing the whole document.
//!
//! ## Example
//!
//! ```ignore
//! use student_records::{JsonFileStore, Student};
//!
//! let store = JsonFileStore::new("students.json");
//! let mut document = store.read().await;
//! document.students.push(Student::new("s-1", "Ada", "CS", 91).into());
//! store.write(&document).await?;
//! ```

mod document;
mod json_file;

use std::io;
use std::path::PathBuf;

pub use document::StoreDocument;
pub use json_file::JsonFileStore;

/// Error type for store writes. Reads never fail; see [`JsonFileStore::read`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document could not be encoded as JSON.
    #[error("failed to serialize store document: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The file (or its temporary sibling) could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
