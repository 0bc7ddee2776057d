//! Shared fixtures for task unit tests.

use crate::task::domain::{DueDate, NewTask, Task, TaskPriority};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
                .single()
                .expect("valid fixed instant"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Reference "now" used across query tests: 2025-02-15 12:00 UTC.
pub fn reference_clock() -> FixedClock {
    FixedClock::at(2025, 2, 15, 12)
}

pub fn due(year: i32, month: u32, day: u32) -> DueDate {
    DueDate::from_ymd(year, month, day).expect("valid due date")
}

pub fn task(description: &str, priority: TaskPriority, due_date: Option<DueDate>) -> Task {
    let mut new_task = NewTask::new(description).with_priority(priority);
    if let Some(due_date) = due_date {
        new_task = new_task.with_due_date(due_date);
    }
    Task::create(new_task, &reference_clock()).expect("valid task")
}

pub fn tagged(description: &str, tags: &[&str]) -> Task {
    Task::create(
        NewTask::new(description).with_tags(tags.iter().copied()),
        &reference_clock(),
    )
    .expect("valid task")
}

pub fn descriptions(tasks: &[&Task]) -> Vec<String> {
    tasks
        .iter()
        .map(|task| task.description().as_str().to_owned())
        .collect()
}
