//! Exact-match filters that preserve input order.

use crate::task::domain::{Task, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};

/// Returns the tasks whose status equals `status`.
#[must_use]
pub fn by_status(tasks: &[Task], status: TaskStatus) -> Vec<&Task> {
    tasks.iter().filter(|task| task.status() == status).collect()
}

/// Returns the tasks whose priority equals `priority`.
#[must_use]
pub fn by_priority(tasks: &[Task], priority: TaskPriority) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.priority() == priority)
        .collect()
}

/// Returns the tasks that are overdue relative to `now`.
#[must_use]
pub fn overdue(tasks: &[Task], now: DateTime<Utc>) -> Vec<&Task> {
    tasks.iter().filter(|task| task.is_overdue(now)).collect()
}
