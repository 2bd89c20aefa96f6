use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ValidationError, ZeroMarks};

/// One student record as stored on disk and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub department: String,
    pub marks: i64,
    /// Fields beyond the four above, carried through rewrites untouched.
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        marks: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            marks,
            extra: Map::new(),
        }
    }

    /// Shallow merge: overwrite only the fields present in `patch`.
    ///
    /// The id is never touched, so a merge can not break id uniqueness.
    pub fn merge(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(marks) = patch.marks {
            self.marks = marks;
        }
    }
}

/// An unchecked create body.
///
/// Fields are kept as raw JSON so a value of the wrong type is reported as a
/// missing field rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentDraft {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub department: Option<Value>,
    #[serde(default)]
    pub marks: Option<Value>,
}

impl StudentDraft {
    /// Build a draft from any JSON value. Non-objects yield an empty draft.
    pub fn from_json(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Check every required field and produce a `Student`.
    pub fn validate(&self, zero_marks: ZeroMarks) -> Result<Student, ValidationError> {
        let id = non_empty_string(self.id.as_ref());
        let name = non_empty_string(self.name.as_ref());
        let department = non_empty_string(self.department.as_ref());
        let marks = self
            .marks
            .as_ref()
            .and_then(Value::as_i64)
            .filter(|m| *m != 0 || zero_marks == ZeroMarks::Accept);

        match (id, name, department, marks) {
            (Some(id), Some(name), Some(department), Some(marks)) => {
                Ok(Student::new(id, name, department, marks))
            }
            (id, name, department, marks) => {
                let mut missing = Vec::new();
                if id.is_none() {
                    missing.push("id");
                }
                if name.is_none() {
                    missing.push("name");
                }
                if department.is_none() {
                    missing.push("department");
                }
                if marks.is_none() {
                    missing.push("marks");
                }
                Err(ValidationError::new(missing))
            }
        }
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// A partial update body. Absent and `null` fields leave the record as is.
///
/// Any `id` in the body is ignored: records are addressed by the path id and
/// keep it for life.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub marks: Option<i64>,
}

impl StudentPatch {
    /// Read an update body. `null` is an empty patch; any other non-object
    /// is rejected, as is a known field of the wrong type.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => serde_json::from_value(value),
            other => Err(serde::de::Error::invalid_type(
                unexpected(&other),
                &"a JSON object",
            )),
        }
    }
}

fn unexpected(value: &Value) -> serde::de::Unexpected<'_> {
    use serde::de::Unexpected;

    match value {
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Number(_) => Unexpected::Other("number"),
        Value::Null | Value::Object(_) => Unexpected::Other("value"),
    }
}

/// Ids in request paths are limited to `[A-Za-z0-9-_]+`.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
