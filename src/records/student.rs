use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Placeholder name for a payment whose student reference does not resolve.
pub const UNKNOWN_STUDENT: &str = "Unknown";
/// Placeholder class for a payment whose student reference does not resolve.
pub const MISSING_CLASS: &str = "-";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub class_level: String,
}

impl Student {
    pub fn new(id: i64, name: impl Into<String>, class_level: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            class_level: class_level.into(),
        }
    }
}

/// Id lookup over the student list, built once per report invocation.
///
/// A missing reference is never an error; it resolves to the fixed
/// placeholders [`UNKNOWN_STUDENT`] and [`MISSING_CLASS`].
pub struct StudentDirectory<'a> {
    by_id: HashMap<i64, &'a Student>,
}

impl<'a> StudentDirectory<'a> {
    pub fn new(students: &'a [Student]) -> Self {
        Self {
            by_id: students.iter().map(|s| (s.id, s)).collect(),
        }
    }

    pub fn get(&self, id: Option<i64>) -> Option<&'a Student> {
        id.and_then(|id| self.by_id.get(&id).copied())
    }

    pub fn name_of(&self, id: Option<i64>) -> &'a str {
        self.get(id).map_or(UNKNOWN_STUDENT, |s| s.name.as_str())
    }

    pub fn class_of(&self, id: Option<i64>) -> &'a str {
        self.get(id).map_or(MISSING_CLASS, |s| s.class_level.as_str())
    }
}
