//! Urgency ordering and status transition policy.

use crate::task::domain::{Task, TaskStatus};
use std::cmp::Ordering;

/// Orders tasks by how soon they demand attention.
///
/// Higher priority comes first. Within a priority, earlier due dates come
/// first and tasks without a due date come last. Remaining ties keep their
/// input order.
#[must_use]
pub fn rank_by_urgency(tasks: &[Task]) -> Vec<&Task> {
    let mut ranked: Vec<&Task> = tasks.iter().collect();
    ranked.sort_by(|a, b| {
        b.priority()
            .cmp(&a.priority())
            .then_with(|| compare_due_dates(a, b))
    });
    ranked
}

fn compare_due_dates(a: &Task, b: &Task) -> Ordering {
    match (a.due_date(), b.due_date()) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Returns whether a task may move from `from` to `to`.
///
/// Every transition is currently permitted, including reopening a done task
/// and transitions to the same status.
#[must_use]
pub const fn is_valid_status_transition(_from: TaskStatus, _to: TaskStatus) -> bool {
    true
}
