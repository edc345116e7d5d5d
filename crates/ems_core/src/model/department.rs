//! Department domain model.

use super::validation::{normalize_name, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned department identifier.
pub type DepartmentId = i64;

/// Persisted organizational grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

/// Input for creating a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
}

impl NewDepartment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns a copy with the name trimmed, or the first validation failure.
    pub fn validated(&self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: normalize_name("name", &self.name)?,
        })
    }
}
