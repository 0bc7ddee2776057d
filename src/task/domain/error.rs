//! Error types for task field validation.

use thiserror::Error;

/// Errors returned while constructing validated task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyIdentifier,

    /// The description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The description exceeds the maximum length.
    #[error("task description must not exceed {max} characters, got {actual}")]
    DescriptionTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Length of the rejected description after trimming.
        actual: usize,
    },

    /// The status value is not one of the supported states.
    #[error("invalid task status '{0}', expected one of: todo, in-progress, done")]
    InvalidStatus(String),

    /// The priority value is not one of the supported levels.
    #[error("invalid task priority '{0}', expected one of: low, medium, high")]
    InvalidPriority(String),

    /// The due date is not a valid calendar date.
    #[error("invalid due date: {0}")]
    InvalidDueDate(String),

    /// A tag is empty after trimming.
    #[error("tag must not be empty")]
    EmptyTag,

    /// A tag exceeds the maximum length.
    #[error("tag '{tag}' exceeds {max} characters")]
    TagTooLong {
        /// The rejected tag after trimming.
        tag: String,
        /// Maximum permitted length in characters.
        max: usize,
    },

    /// The tag collection exceeds the maximum size.
    #[error("cannot have more than {max} tags")]
    TooManyTags {
        /// Maximum permitted number of distinct tags.
        max: usize,
    },

    /// A persisted timestamp could not be parsed.
    #[error("invalid {field} timestamp '{value}'")]
    InvalidTimestamp {
        /// Name of the timestamp field.
        field: &'static str,
        /// The rejected raw value.
        value: String,
    },
}
