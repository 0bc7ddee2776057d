//! Raw request payloads accepted by [`super::TaskService`].

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(super) description: String,
    pub(super) priority: Option<String>,
    pub(super) due_date: Option<String>,
    pub(super) tags: Vec<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            priority: None,
            due_date: None,
            tags: Vec::new(),
        }
    }

    /// Sets the priority (`low`, `medium`, or `high`).
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date as RFC 3339 or `YYYY-MM-DD`.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// Request payload for updating a task.
///
/// Fields left unset are not changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    pub(super) id: String,
    pub(super) description: Option<String>,
    pub(super) status: Option<String>,
    pub(super) priority: Option<String>,
    pub(super) due_date: Option<Option<String>>,
    pub(super) tags: Option<Vec<String>>,
}

impl UpdateTaskRequest {
    /// Creates an update request for the task `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            status: None,
            priority: None,
            due_date: None,
            tags: None,
        }
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Changes the status (`todo`, `in-progress`, or `done`).
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Changes the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date as RFC 3339 or `YYYY-MM-DD`.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(Some(due_date.into()));
        self
    }

    /// Removes the due date.
    #[must_use]
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Replaces every tag.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }
}
