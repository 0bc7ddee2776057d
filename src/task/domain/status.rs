//! Task workflow status.

use super::{TaskValidationError, ValidatedField};
use std::fmt;

/// Task workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is complete.
    Done,
}

impl TaskStatus {
    /// Every status, in workflow order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Parses a status, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::InvalidStatus`] for unknown values.
    pub fn parse(value: &str) -> Result<Self, TaskValidationError> {
        Self::try_from(value)
    }

    /// Returns `true` for [`TaskStatus::Todo`].
    #[must_use]
    pub const fn is_todo(self) -> bool {
        matches!(self, Self::Todo)
    }

    /// Returns `true` for [`TaskStatus::InProgress`].
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Returns `true` for [`TaskStatus::Done`].
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = TaskValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(TaskValidationError::InvalidStatus(value.to_owned())),
        }
    }
}

impl ValidatedField for TaskStatus {
    const FIELD: &'static str = "status";
    type Input = String;
    type Value = str;

    fn validate(input: String) -> Result<Self, TaskValidationError> {
        Self::try_from(input.as_str())
    }

    fn value(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
