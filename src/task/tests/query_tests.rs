//! Filtering, ranking, and statistics over task collections.

use super::support::{descriptions, due, reference_clock, task};
use crate::task::{
    domain::{DueDate, NewTask, Task, TaskPriority, TaskStatus},
    query::{
        TaskStats, by_priority, by_status, is_valid_status_transition, overdue, rank_by_urgency,
        statistics,
    },
};
use rstest::{fixture, rstest};

#[fixture]
fn mixed_tasks() -> Vec<Task> {
    let clock = reference_clock();
    vec![
        task("todo overdue", TaskPriority::Low, Some(due(2025, 2, 1))),
        task("todo future", TaskPriority::High, Some(due(2025, 3, 1))),
        task("todo undated", TaskPriority::Medium, None),
        task("progress overdue", TaskPriority::High, Some(due(2025, 2, 14)))
            .mark_as_in_progress(&clock),
        task("progress today", TaskPriority::Low, Some(due(2025, 2, 15)))
            .mark_as_in_progress(&clock),
        task("done", TaskPriority::Medium, None).mark_as_done(&clock),
    ]
}

#[rstest]
fn by_status_preserves_input_order(mixed_tasks: Vec<Task>) {
    assert_eq!(
        descriptions(&by_status(&mixed_tasks, TaskStatus::Todo)),
        vec!["todo overdue", "todo future", "todo undated"]
    );
    assert_eq!(
        descriptions(&by_status(&mixed_tasks, TaskStatus::Done)),
        vec!["done"]
    );
}

#[rstest]
fn by_priority_matches_exactly(mixed_tasks: Vec<Task>) {
    assert_eq!(
        descriptions(&by_priority(&mixed_tasks, TaskPriority::High)),
        vec!["todo future", "progress overdue"]
    );
}

#[rstest]
fn overdue_excludes_today_and_undated(mixed_tasks: Vec<Task>) {
    let now = reference_clock().0;
    assert_eq!(
        descriptions(&overdue(&mixed_tasks, now)),
        vec!["todo overdue", "progress overdue"]
    );
}

#[rstest]
fn statistics_partition_statuses_and_count_overdue_independently(mixed_tasks: Vec<Task>) {
    let stats = statistics(&mixed_tasks, reference_clock().0);

    assert_eq!(
        stats,
        TaskStats {
            total: 6,
            todo: 3,
            in_progress: 2,
            done: 1,
            overdue: 2,
        }
    );
    assert_eq!(stats.todo + stats.in_progress + stats.done, stats.total);
}

#[rstest]
fn statistics_of_empty_collection_are_zero() {
    assert_eq!(statistics(&[], reference_clock().0), TaskStats::default());
}

#[rstest]
fn rank_orders_by_priority_then_due_date() {
    let tasks = vec![
        task("low", TaskPriority::Low, None),
        task("high march", TaskPriority::High, Some(due(2025, 3, 1))),
        task("high january", TaskPriority::High, Some(due(2025, 1, 1))),
    ];

    assert_eq!(
        descriptions(&rank_by_urgency(&tasks)),
        vec!["high january", "high march", "low"]
    );
}

#[rstest]
fn rank_places_undated_after_dated_within_priority_only() {
    let tasks = vec![
        task("low dated", TaskPriority::Low, Some(due(2024, 12, 1))),
        task("high undated", TaskPriority::High, None),
        task("high dated", TaskPriority::High, Some(due(2025, 6, 1))),
        task("medium dated", TaskPriority::Medium, Some(due(2025, 1, 1))),
    ];

    assert_eq!(
        descriptions(&rank_by_urgency(&tasks)),
        vec!["high dated", "high undated", "medium dated", "low dated"]
    );
}

#[rstest]
fn rank_is_stable_and_leaves_input_untouched() {
    let tasks = vec![
        task("first", TaskPriority::Medium, None),
        task("second", TaskPriority::Medium, None),
        task("third", TaskPriority::Medium, Some(due(2025, 5, 5))),
        task("fourth", TaskPriority::Medium, Some(due(2025, 5, 5))),
    ];

    assert_eq!(
        descriptions(&rank_by_urgency(&tasks)),
        vec!["third", "fourth", "first", "second"]
    );
    let original: Vec<&Task> = tasks.iter().collect();
    assert_eq!(
        descriptions(&original),
        vec!["first", "second", "third", "fourth"]
    );
}

#[rstest]
fn every_status_transition_is_permitted() {
    for from in TaskStatus::ALL {
        for to in TaskStatus::ALL {
            assert!(is_valid_status_transition(from, to), "{from} -> {to}");
        }
    }
}

#[rstest]
fn urgency_order_is_unchanged_by_persisting_same_day_tasks() {
    let clock = reference_clock();
    let late = Task::create(
        NewTask::new("late")
            .with_priority(TaskPriority::High)
            .with_due_date(DueDate::parse("2025-03-01T18:00:00Z").expect("valid instant")),
        &clock,
    )
    .expect("valid task");
    let early = Task::create(
        NewTask::new("early")
            .with_priority(TaskPriority::High)
            .with_due_date(DueDate::parse("2025-03-01T09:00:00Z").expect("valid instant")),
        &clock,
    )
    .expect("valid task");
    let fresh = vec![late, early];
    let restored: Vec<Task> = fresh
        .iter()
        .map(|task| Task::try_from(task.to_record()).expect("record restores"))
        .collect();

    let fresh_order = descriptions(&rank_by_urgency(&fresh));
    assert_eq!(fresh_order, descriptions(&rank_by_urgency(&restored)));
    assert_eq!(fresh_order, vec!["late", "early"]);
}
