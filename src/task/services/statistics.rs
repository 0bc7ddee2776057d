//! Aggregate statistics over a task collection.

use crate::task::{
    domain::{Task, TaskPriority},
    query,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Task counts by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    /// Tasks in the `todo` state.
    pub todo: usize,
    /// Tasks in the `in-progress` state.
    pub in_progress: usize,
    /// Tasks in the `done` state.
    pub done: usize,
}

/// Task counts by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PriorityCounts {
    /// Tasks with low priority.
    pub low: usize,
    /// Tasks with medium priority.
    pub medium: usize,
    /// Tasks with high priority.
    pub high: usize,
}

/// Summary of a task collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    /// Number of tasks.
    pub total_tasks: usize,
    /// Counts by status.
    pub by_status: StatusCounts,
    /// Counts by priority.
    pub by_priority: PriorityCounts,
    /// Number of done tasks.
    pub completed_tasks: usize,
    /// Number of overdue tasks, regardless of status.
    pub overdue_tasks: usize,
    /// Done tasks as a whole-number percentage, rounded half up.
    pub completion_percentage: usize,
    /// Every distinct tag, sorted.
    pub all_tags: Vec<String>,
    /// Number of tasks carrying each tag.
    pub tag_counts: BTreeMap<String, usize>,
    /// Mean tags per task, rounded to one decimal place.
    pub average_tags_per_task: f64,
    /// Tasks that have a due date.
    pub tasks_with_due_date: usize,
    /// Tasks without a due date.
    pub tasks_without_due_date: usize,
}

impl TaskStatistics {
    /// Computes statistics for `tasks` relative to the reference instant
    /// `now`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task], now: DateTime<Utc>) -> Self {
        let counts = query::statistics(tasks, now);

        let mut by_priority = PriorityCounts::default();
        let mut tag_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut tasks_with_due_date = 0;
        for task in tasks {
            match task.priority() {
                TaskPriority::Low => by_priority.low += 1,
                TaskPriority::Medium => by_priority.medium += 1,
                TaskPriority::High => by_priority.high += 1,
            }
            for tag in task.tags().iter() {
                *tag_counts.entry(tag.to_owned()).or_default() += 1;
            }
            if task.due_date().is_some() {
                tasks_with_due_date += 1;
            }
        }

        let tag_total: usize = tag_counts.values().sum();
        Self {
            total_tasks: counts.total,
            by_status: StatusCounts {
                todo: counts.todo,
                in_progress: counts.in_progress,
                done: counts.done,
            },
            by_priority,
            completed_tasks: counts.done,
            overdue_tasks: counts.overdue,
            completion_percentage: rounded_percentage(counts.done, counts.total),
            all_tags: tag_counts.keys().cloned().collect(),
            tag_counts,
            average_tags_per_task: rounded_average(tag_total, counts.total),
            tasks_with_due_date,
            tasks_without_due_date: counts.total - tasks_with_due_date,
        }
    }
}

#[expect(
    clippy::integer_division,
    reason = "percentages are rounded half up in integer arithmetic"
)]
fn rounded_percentage(part: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (part * 200 + total) / (total * 2)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the average is reported as a one-decimal float"
)]
fn rounded_average(sum: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (sum as f64 / count as f64 * 10.0).round() / 10.0
}
