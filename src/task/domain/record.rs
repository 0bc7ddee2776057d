//! Plain persisted shape of a task.

use super::{PersistedTaskData, TaskValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serializable snapshot of a task as stored in a backing collection.
///
/// Timestamps are RFC 3339 strings in UTC and the due date is a
/// `YYYY-MM-DD` string. An absent due date is written as `null` and may be
/// omitted entirely on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Task identifier.
    pub id: String,
    /// Task description.
    pub description: String,
    /// Canonical status (`todo`, `in-progress`, or `done`).
    pub status: String,
    /// Canonical priority (`low`, `medium`, or `high`).
    pub priority: String,
    /// Due date, if any.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Tags in insertion order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Latest update timestamp.
    pub updated_at: String,
}

impl TaskRecord {
    /// Converts the record into restoration parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::InvalidTimestamp`] when either
    /// timestamp is not valid RFC 3339.
    pub fn into_persisted(self) -> Result<PersistedTaskData, TaskValidationError> {
        let created_at = parse_timestamp("createdAt", &self.created_at)?;
        let updated_at = parse_timestamp("updatedAt", &self.updated_at)?;
        Ok(PersistedTaskData {
            id: self.id,
            description: self.description,
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
            tags: self.tags,
            created_at,
            updated_at,
        })
    }
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, TaskValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|_| TaskValidationError::InvalidTimestamp {
            field,
            value: value.to_owned(),
        })
}
