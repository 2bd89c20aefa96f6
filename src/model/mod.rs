//! Models - The student record and the request bodies that produce it.
//!
//! A `Student` is what lives in the store. Stored entries that do not fit
//! its shape are kept as raw JSON in a [`Record`]. Request bodies arrive in
//! two shapes:
//!
//! - [`StudentDraft`] for create, loosely typed so that every field can be
//!   checked for presence before anything is stored.
//! - [`StudentPatch`] for update, where every field is optional and only the
//!   supplied ones are merged onto the existing record.
//!
//! ## Example
//!
//! ```ignore
//! use student_records::{StudentDraft, ZeroMarks};
//!
//! let draft: StudentDraft = serde_json::from_value(json!({
//!     "id": "s-1", "name": "Ada", "department": "CS", "marks": 91
//! }))?;
//! let student = draft.validate(ZeroMarks::Reject)?;
//! ```

mod record;
mod student;

use std::fmt;

pub use record::Record;
pub use student::{is_valid_id, Student, StudentDraft, StudentPatch};

/// How a `marks` value of `0` is treated when creating a record.
///
/// Records created through the HTTP API historically rejected `0` as if the
/// field were missing. `Reject` keeps that behavior; `Accept` treats `0` as
/// an ordinary score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroMarks {
    #[default]
    Reject,
    Accept,
}

/// A create body failed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    /// Names of the fields that were absent, empty, or of the wrong type.
    pub missing: Vec<&'static str>,
}

impl ValidationError {
    pub(crate) fn new(missing: Vec<&'static str>) -> Self {
        Self { missing }
    }
}

impl fmt::Display for ZeroMarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZeroMarks::Reject => write!(f, "reject"),
            ZeroMarks::Accept => write!(f, "accept"),
        }
    }
}
