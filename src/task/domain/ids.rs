//! Identifier type for the task domain.

use super::{TaskValidationError, ValidatedField};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a task record.
///
/// Freshly generated identifiers are random UUIDs. Restored identifiers are
/// kept verbatim so that records written by other tools still resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Restores a task identifier from a persisted value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::EmptyIdentifier`] when the value is
    /// empty after trimming.
    pub fn parse(value: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::validate(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValidatedField for TaskId {
    const FIELD: &'static str = "id";
    type Input = String;
    type Value = str;

    fn validate(input: String) -> Result<Self, TaskValidationError> {
        if input.trim().is_empty() {
            return Err(TaskValidationError::EmptyIdentifier);
        }
        Ok(Self(input))
    }

    fn value(&self) -> &str {
        self.as_str()
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
