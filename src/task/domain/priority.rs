//! Task priority levels and their ordering.

use super::{TaskValidationError, ValidatedField};
use std::cmp::Ordering;
use std::fmt;

/// Task priority level.
///
/// Priorities are ordered by their ordinal: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskPriority {
    /// Ordinal 1.
    Low,
    /// Ordinal 2. Used when a task is created without a priority.
    #[default]
    Medium,
    /// Ordinal 3.
    High,
}

impl TaskPriority {
    /// Every priority, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Returns the numeric rank used for ordering.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Parses a priority, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::InvalidPriority`] for unknown values.
    pub fn parse(value: &str) -> Result<Self, TaskValidationError> {
        Self::try_from(value)
    }

    /// Returns `true` when `self` ranks strictly above `other`.
    #[must_use]
    pub const fn is_higher_than(self, other: Self) -> bool {
        self.ordinal() > other.ordinal()
    }

    /// Returns `true` when `self` ranks strictly below `other`.
    #[must_use]
    pub const fn is_lower_than(self, other: Self) -> bool {
        self.ordinal() < other.ordinal()
    }
}

impl Ord for TaskPriority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for TaskPriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = TaskValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TaskValidationError::InvalidPriority(value.to_owned())),
        }
    }
}

impl ValidatedField for TaskPriority {
    const FIELD: &'static str = "priority";
    type Input = String;
    type Value = str;

    fn validate(input: String) -> Result<Self, TaskValidationError> {
        Self::try_from(input.as_str())
    }

    fn value(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
