//! Task use-case orchestration.

use super::{
    CreateTaskRequest, ExportOptions, TaskStatistics, TaskView, UpdateTaskRequest,
    export::UnsupportedExportFormat,
};
use crate::task::{
    domain::{DueDate, NewTask, Task, TaskId, TaskPriority, TaskStatus, TaskValidationError},
    ports::{TaskRepository, TaskRepositoryError},
    query::{self, SearchCriteria},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// The status transition is not permitted.
    #[error("cannot change task status from {from} to {to}")]
    InvalidTransition {
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// The export format is not supported.
    #[error(transparent)]
    UnsupportedExportFormat(#[from] UnsupportedExportFormat),

    /// Rendering task views failed.
    #[error("failed to serialize tasks: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task use-case orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when input validation fails or the
    /// repository rejects persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<TaskView> {
        let mut new_task = NewTask::new(request.description).with_tags(request.tags);
        if let Some(priority) = request.priority {
            new_task = new_task.with_priority(TaskPriority::parse(&priority)?);
        }
        if let Some(due_date) = request.due_date {
            new_task = new_task.with_due_date(DueDate::parse(&due_date)?);
        }

        let task = Task::create(new_task, &*self.clock)?;
        self.repository.save(&task).await?;
        info!(task_id = %task.id(), "created task");
        Ok(self.view(&task))
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] wrapping
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub async fn get(&self, id: &str) -> TaskServiceResult<TaskView> {
        let task = self.repository.find_by_id(&TaskId::parse(id)?).await?;
        Ok(self.view(&task))
    }

    /// Applies the requested changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the task does not exist, a field is
    /// invalid, or the status transition is not permitted.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskServiceResult<TaskView> {
        let clock = &*self.clock;
        let mut task = self.repository.find_by_id(&TaskId::parse(request.id)?).await?;

        if let Some(description) = request.description {
            task = task.update_description(description, clock)?;
        }
        if let Some(status) = request.status {
            let to = TaskStatus::parse(&status)?;
            let from = task.status();
            if !query::is_valid_status_transition(from, to) {
                return Err(TaskServiceError::InvalidTransition { from, to });
            }
            task = task.update_status(to, clock);
        }
        if let Some(priority) = request.priority {
            task = task.update_priority(TaskPriority::parse(&priority)?, clock);
        }
        if let Some(raw_due_date) = request.due_date {
            let due_date = raw_due_date.as_deref().map(DueDate::parse).transpose()?;
            task = task.update_due_date(due_date, clock);
        }
        if let Some(tags) = request.tags {
            task = task.update_tags(tags, clock)?;
        }

        self.repository.update(&task).await?;
        info!(task_id = %task.id(), "updated task");
        Ok(self.view(&task))
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] wrapping
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub async fn delete(&self, id: &str) -> TaskServiceResult<()> {
        let task_id = TaskId::parse(id)?;
        self.repository.find_by_id(&task_id).await?;
        self.repository.delete(&task_id).await?;
        info!(task_id = %task_id, "deleted task");
        Ok(())
    }

    /// Lists every task in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when loading fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<TaskView>> {
        let tasks = self.repository.find_all().await?;
        Ok(self.views(tasks.iter()))
    }

    /// Lists tasks matching `criteria`, in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when loading fails.
    pub async fn search(&self, criteria: &SearchCriteria) -> TaskServiceResult<Vec<TaskView>> {
        let tasks = self.repository.find_all().await?;
        let matches = query::search(&tasks, criteria, self.clock.utc());
        Ok(self.views(matches))
    }

    /// Lists every task, most urgent first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when loading fails.
    pub async fn urgent(&self) -> TaskServiceResult<Vec<TaskView>> {
        let tasks = self.repository.find_all().await?;
        Ok(self.views(query::rank_by_urgency(&tasks)))
    }

    /// Lists overdue tasks in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when loading fails.
    pub async fn overdue(&self) -> TaskServiceResult<Vec<TaskView>> {
        let tasks = self.repository.find_all().await?;
        Ok(self.views(query::overdue(&tasks, self.clock.utc())))
    }

    /// Summarizes every stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when loading fails.
    pub async fn statistics(&self) -> TaskServiceResult<TaskStatistics> {
        let tasks = self.repository.find_all().await?;
        Ok(TaskStatistics::from_tasks(&tasks, self.clock.utc()))
    }

    /// Renders every stored task in the requested format.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when loading or rendering fails.
    pub async fn export(&self, options: ExportOptions) -> TaskServiceResult<String> {
        let views = self.list().await?;
        Ok(options.render(&views)?)
    }

    fn view(&self, task: &Task) -> TaskView {
        TaskView::from_task(task, self.clock.utc())
    }

    fn views<'a>(&self, tasks: impl IntoIterator<Item = &'a Task>) -> Vec<TaskView> {
        let now = self.clock.utc();
        tasks
            .into_iter()
            .map(|task| TaskView::from_task(task, now))
            .collect()
    }
}
