//! Free-text task description.

use super::{TaskValidationError, ValidatedField};
use std::fmt;

/// Maximum description length in characters, measured after trimming.
const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Validated task description.
///
/// Descriptions are trimmed on construction and must hold between 1 and
/// `MAX_DESCRIPTION_LENGTH` characters.
///
/// # Examples
///
///     use tasktrack::task::domain::TaskDescription;
///
///     let description = TaskDescription::new("  Write report  ").expect("valid");
///     assert_eq!(description.as_str(), "Write report");
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::EmptyDescription`] when the value is
    /// blank, or [`TaskValidationError::DescriptionTooLong`] when it exceeds
    /// the length limit.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::validate(value.into())
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValidatedField for TaskDescription {
    const FIELD: &'static str = "description";
    type Input = String;
    type Value = str;

    fn validate(input: String) -> Result<Self, TaskValidationError> {
        let trimmed = input.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            return Err(TaskValidationError::EmptyDescription);
        }
        if length > MAX_DESCRIPTION_LENGTH {
            return Err(TaskValidationError::DescriptionTooLong {
                max: MAX_DESCRIPTION_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    fn value(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
