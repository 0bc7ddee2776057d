//! Response projection consumed by presentation and export collaborators.

use crate::task::domain::{Task, TaskRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Persisted task fields plus derived flags.
///
/// The derived flags are computed when the view is built and are never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Persisted task fields.
    #[serde(flatten)]
    pub record: TaskRecord,
    /// Whether the task was overdue when the view was built.
    pub is_overdue: bool,
    /// Whether the task is done.
    pub is_done: bool,
}

impl TaskView {
    /// Projects `task` relative to the reference instant `now`.
    #[must_use]
    pub fn from_task(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            record: task.to_record(),
            is_overdue: task.is_overdue(now),
            is_done: task.is_done(),
        }
    }
}
