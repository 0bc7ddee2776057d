//! Single-pass task counts.

use crate::task::domain::{Task, TaskStatus};
use chrono::{DateTime, Utc};

/// Task counts partitioned by status, with an independent overdue count.
///
/// `todo + in_progress + done == total` always holds; `overdue` may overlap
/// any status bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    /// Number of tasks examined.
    pub total: usize,
    /// Tasks in the `todo` state.
    pub todo: usize,
    /// Tasks in the `in-progress` state.
    pub in_progress: usize,
    /// Tasks in the `done` state.
    pub done: usize,
    /// Tasks overdue relative to the reference instant.
    pub overdue: usize,
}

/// Counts tasks by status and overdue flag in a single pass.
#[must_use]
pub fn statistics(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    tasks.iter().fold(TaskStats::default(), |mut stats, task| {
        stats.total += 1;
        match task.status() {
            TaskStatus::Todo => stats.todo += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Done => stats.done += 1,
        }
        if task.is_overdue(now) {
            stats.overdue += 1;
        }
        stats
    })
}
