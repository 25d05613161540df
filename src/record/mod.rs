use std::fmt;

use serde::{Deserialize, Serialize};

/// A single key/value entry held by a collection.
///
/// Records are plain data: equality, hashing and formatting all cover both
/// fields. Contents are not validated, so empty strings are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    field: String,
    value: String,
}

impl Record {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Record {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Structural dump, fields in declaration order: `{Field:<f> Value:<v>}`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Field:{} Value:{}}}", self.field, self.value)
    }
}
