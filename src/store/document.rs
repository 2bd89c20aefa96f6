use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::model::Record;

/// The full persisted store in its canonical shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub students: Vec<Record>,
}

/// Shapes accepted when reading the data file.
#[derive(Deserialize)]
#[serde(untagged)]
enum OnDisk {
    Wrapped(StoreDocument),
    Bare(Vec<Record>),
}

impl From<OnDisk> for StoreDocument {
    fn from(on_disk: OnDisk) -> Self {
        match on_disk {
            OnDisk::Wrapped(document) => document,
            OnDisk::Bare(students) => StoreDocument { students },
        }
    }
}

impl StoreDocument {
    pub fn new(students: impl IntoIterator<Item = impl Into<Record>>) -> Self {
        Self {
            students: students.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse file contents. Blank input is an empty store.
    ///
    /// Only a syntax error or a wrong top-level shape is an error; entries
    /// of the wrong shape are kept as [`Record::Raw`].
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str::<OnDisk>(text).map(Into::into)
    }

    /// Encode with four-space indentation.
    pub fn to_pretty_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        Ok(out)
    }

    pub fn find(&self, id: &str) -> Option<&Record> {
        self.students.iter().find(|r| r.id() == Some(id))
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|r| r.id() == Some(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Drop every record with `id`, returning how many went.
    pub fn remove_all(&mut self, id: &str) -> usize {
        let before = self.students.len();
        self.students.retain(|r| r.id() != Some(id));
        before - self.students.len()
    }
}
