//! Task aggregate root and its construction parameters.

use super::{
    DueDate, TaskDescription, TaskId, TaskPriority, TaskRecord, TaskStatus, TaskTags,
    TaskValidationError, ValidatedField,
};
use chrono::{DateTime, SecondsFormat, Utc};
use mockable::Clock;
use std::fmt;

/// Task aggregate root.
///
/// Tasks are immutable: every update returns a new task carrying the same
/// identifier and creation time, with `updated_at` advanced to the clock's
/// current time.
#[derive(Debug, Clone)]
pub struct Task {
    id: TaskId,
    description: TaskDescription,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<DueDate>,
    tags: TaskTags,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a fresh task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    description: String,
    priority: TaskPriority,
    due_date: Option<DueDate>,
    tags: Vec<String>,
}

impl NewTask {
    /// Creates parameters with the required description.
    ///
    /// Priority defaults to [`TaskPriority::Medium`].
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            priority: TaskPriority::default(),
            due_date: None,
            tags: Vec::new(),
        }
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DueDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the raw tags, validated on creation.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Parameter object for reconstructing a persisted task.
///
/// Every field is raw and is re-validated by [`Task::restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: String,
    /// Persisted priority.
    pub priority: String,
    /// Persisted due date, if any.
    pub due_date: Option<String>,
    /// Persisted tags.
    pub tags: Vec<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the `todo` state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when the description or tags are
    /// invalid.
    pub fn create(new_task: NewTask, clock: &impl Clock) -> Result<Self, TaskValidationError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            description: TaskDescription::new(new_task.description)?,
            status: TaskStatus::Todo,
            priority: new_task.priority,
            due_date: new_task.due_date,
            tags: TaskTags::new(new_task.tags)?,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when any persisted field violates its
    /// invariants.
    pub fn restore(data: PersistedTaskData) -> Result<Self, TaskValidationError> {
        Ok(Self {
            id: TaskId::validate(data.id)?,
            description: TaskDescription::validate(data.description)?,
            status: TaskStatus::validate(data.status)?,
            priority: TaskPriority::validate(data.priority)?,
            due_date: data.due_date.map(DueDate::validate).transpose()?,
            tags: TaskTags::validate(data.tags)?,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DueDate> {
        self.due_date
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &TaskTags {
        &self.tags
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns a copy with a new description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when the description is invalid.
    pub fn update_description(
        &self,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskValidationError> {
        let validated = TaskDescription::new(description)?;
        Ok(self.touched(clock, |task| task.description = validated))
    }

    /// Returns a copy with a new status.
    #[must_use]
    pub fn update_status(&self, status: TaskStatus, clock: &impl Clock) -> Self {
        self.touched(clock, |task| task.status = status)
    }

    /// Returns a copy with a new priority.
    #[must_use]
    pub fn update_priority(&self, priority: TaskPriority, clock: &impl Clock) -> Self {
        self.touched(clock, |task| task.priority = priority)
    }

    /// Returns a copy with the due date set, or cleared when `None`.
    #[must_use]
    pub fn update_due_date(&self, due_date: Option<DueDate>, clock: &impl Clock) -> Self {
        self.touched(clock, |task| task.due_date = due_date)
    }

    /// Returns a copy with every tag replaced.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when the tags are invalid.
    pub fn update_tags<I, S>(&self, tags: I, clock: &impl Clock) -> Result<Self, TaskValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let validated = TaskTags::new(tags)?;
        Ok(self.touched(clock, |task| task.tags = validated))
    }

    /// Returns a copy with `tag` added.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when the tag is invalid or the tag
    /// set is full.
    pub fn add_tag(&self, tag: &str, clock: &impl Clock) -> Result<Self, TaskValidationError> {
        let tags = self.tags.add(tag)?;
        Ok(self.touched(clock, |task| task.tags = tags))
    }

    /// Returns a copy with `tag` removed.
    #[must_use]
    pub fn remove_tag(&self, tag: &str, clock: &impl Clock) -> Self {
        let tags = self.tags.remove(tag);
        self.touched(clock, |task| task.tags = tags)
    }

    /// Returns a copy in the `todo` state.
    #[must_use]
    pub fn mark_as_todo(&self, clock: &impl Clock) -> Self {
        self.update_status(TaskStatus::Todo, clock)
    }

    /// Returns a copy in the `in-progress` state.
    #[must_use]
    pub fn mark_as_in_progress(&self, clock: &impl Clock) -> Self {
        self.update_status(TaskStatus::InProgress, clock)
    }

    /// Returns a copy in the `done` state.
    #[must_use]
    pub fn mark_as_done(&self, clock: &impl Clock) -> Self {
        self.update_status(TaskStatus::Done, clock)
    }

    /// Returns `true` when the due day is strictly before the day of `now`.
    ///
    /// Tasks without a due date are never overdue.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due.is_overdue_at(now))
    }

    /// Returns `true` when the task is done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// Returns `true` when the task is in progress.
    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        self.status.is_in_progress()
    }

    /// Returns `true` when the task has not been started.
    #[must_use]
    pub const fn is_todo(&self) -> bool {
        self.status.is_todo()
    }

    /// Returns the plain persisted snapshot of this task.
    #[must_use]
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.as_str().to_owned(),
            description: self.description.as_str().to_owned(),
            status: self.status.as_str().to_owned(),
            priority: self.priority.as_str().to_owned(),
            due_date: self.due_date.map(DueDate::as_date_string),
            tags: self.tags.to_vec(),
            created_at: format_instant(self.created_at),
            updated_at: format_instant(self.updated_at),
        }
    }

    fn touched(&self, clock: &impl Clock, change: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        change(&mut next);
        next.updated_at = clock.utc();
        next
    }
}

/// Formats an instant as RFC 3339 in UTC, keeping sub-second precision.
fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        Self::restore(record.into_persisted()?)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(id={}, description=\"{}\", status={}, priority={})",
            self.id, self.description, self.status, self.priority
        )
    }
}
