//! Repository port for task persistence and lookup.

use super::StoreError;
use crate::task::domain::{Task, TaskId, TaskPriority, TaskStatus, TaskValidationError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations hold at most one task per [`TaskId`]. Each mutating call
/// is a complete read-modify-write of the backing collection; nothing is
/// updated partially.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::AlreadyExists`] when the task ID is
    /// already stored.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Task>;

    /// Returns every task in stored order.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Replaces an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()>;

    /// Returns every task with the given status.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task with the given priority.
    async fn find_by_priority(&self, priority: TaskPriority) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task carrying exactly `tag` (case-sensitive).
    async fn find_by_tag(&self, tag: &str) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("task already exists: {0}")]
    AlreadyExists(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The backing store failed or holds content that cannot be restored.
    #[error("failed to {operation}: {source}")]
    Store {
        /// Repository operation that failed.
        operation: &'static str,
        /// Underlying cause.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl TaskRepositoryError {
    /// Wraps a store failure with the failing operation.
    #[must_use]
    pub fn store(operation: &'static str, err: StoreError) -> Self {
        Self::Store {
            operation,
            source: Arc::new(err),
        }
    }

    /// Wraps a persisted record that failed validation.
    #[must_use]
    pub fn corrupt(operation: &'static str, err: TaskValidationError) -> Self {
        Self::Store {
            operation,
            source: Arc::new(err),
        }
    }
}
