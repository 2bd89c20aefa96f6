use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Student, StudentPatch};

/// One entry of the stored `students` array.
///
/// Entries that fit the `Student` shape are typed. Anything else (a string
/// mark, a missing field) is kept as the raw JSON it was read as, so a
/// rewrite of the document never drops it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Student(Student),
    Raw(Value),
}

impl Record {
    /// The record's id, if it has a string one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Record::Student(student) => Some(&student.id),
            Record::Raw(value) => value.get("id").and_then(Value::as_str),
        }
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            Record::Student(student) => Some(student),
            Record::Raw(_) => None,
        }
    }

    /// Shallow merge. Raw objects take the patched fields as JSON values and
    /// become typed once they fit the `Student` shape; other raw values are
    /// left alone.
    pub fn merge(&mut self, patch: StudentPatch) {
        let value = match self {
            Record::Student(student) => return student.merge(patch),
            Record::Raw(value) => value,
        };

        if let Value::Object(fields) = value {
            if let Some(name) = patch.name {
                fields.insert("name".to_string(), Value::from(name));
            }
            if let Some(department) = patch.department {
                fields.insert("department".to_string(), Value::from(department));
            }
            if let Some(marks) = patch.marks {
                fields.insert("marks".to_string(), Value::from(marks));
            }
        }

        if let Ok(student) = Student::deserialize(&*value) {
            *self = Record::Student(student);
        }
    }
}

impl From<Student> for Record {
    fn from(student: Student) -> Self {
        Record::Student(student)
    }
}
