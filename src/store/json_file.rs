//! JsonFileStore - The data file on disk, read whole and rewritten whole.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, error, info};

use super::{StoreDocument, StoreError};

/// Reads and rewrites a single JSON document holding every record.
///
/// There is no cache: each `read` goes to disk. Each `write` replaces the
/// file in full by writing a temporary sibling and renaming it over the
/// target, so a concurrent reader sees either the old or the new document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document.
    ///
    /// Never fails. A missing file is created empty; unreadable or malformed
    /// content is logged and treated as an empty store. Well-formed content
    /// keeps every entry, including ones that are not valid students.
    pub async fn read(&self) -> StoreDocument {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "data file not found, initializing empty store");
                let document = StoreDocument::default();
                if let Err(e) = self.write(&document).await {
                    debug!(error = %e, "serving empty store without a data file");
                }
                return document;
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "error reading data file");
                return StoreDocument::default();
            }
        };

        match StoreDocument::parse(&text) {
            Ok(document) => document,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "error parsing data file, treating as empty");
                StoreDocument::default()
            }
        }
    }

    /// Replace the file with `document`.
    pub async fn write(&self, document: &StoreDocument) -> Result<(), StoreError> {
        let result = self.write_inner(document).await;
        match &result {
            Ok(()) => debug!(
                path = %self.path.display(),
                records = document.students.len(),
                "data file written"
            ),
            Err(e) => error!(path = %self.path.display(), error = %e, "error writing data file"),
        }
        result
    }

    async fn write_inner(&self, document: &StoreDocument) -> Result<(), StoreError> {
        let bytes = document.to_pretty_json()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, &bytes)
            .await
            .map_err(|e| StoreError::io(&temp, e))?;

        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(StoreError::io(&self.path, e));
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("students.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
