//! Repository over a whole-collection store.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::task::{
    domain::{Task, TaskId, TaskPriority, TaskRecord, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult, TaskStore},
};

/// Task repository backed by any [`TaskStore`].
///
/// Every mutation loads the entire collection, changes it in memory, and
/// writes the entire collection back. There is no locking: two concurrent
/// mutations against the same store may interleave, in which case the later
/// write silently discards the earlier one.
#[derive(Debug, Clone, Default)]
pub struct CollectionTaskRepository<S> {
    store: S,
}

impl<S: TaskStore> CollectionTaskRepository<S> {
    /// Creates a repository over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    async fn load(&self, operation: &'static str) -> TaskRepositoryResult<Vec<TaskRecord>> {
        let records = self
            .store
            .load_all()
            .await
            .map_err(|err| TaskRepositoryError::store(operation, err))?;
        debug!(operation, count = records.len(), "loaded task records");
        Ok(records)
    }

    async fn write(
        &self,
        operation: &'static str,
        records: &[TaskRecord],
    ) -> TaskRepositoryResult<()> {
        self.store
            .replace_all(records)
            .await
            .map_err(|err| TaskRepositoryError::store(operation, err))?;
        debug!(operation, count = records.len(), "replaced task records");
        Ok(())
    }

    async fn load_matching(
        &self,
        operation: &'static str,
        keep: impl Fn(&Task) -> bool + Send,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = restore_all(operation, self.load(operation).await?)?;
        Ok(tasks.into_iter().filter(|task| keep(task)).collect())
    }

    /// Locates `id`, failing with `NotFound` when absent.
    fn require_position(
        operation: &'static str,
        records: &[TaskRecord],
        id: &TaskId,
    ) -> TaskRepositoryResult<usize> {
        position_of(records, id).ok_or_else(|| {
            warn!(operation, task_id = %id, "task not found");
            TaskRepositoryError::NotFound(id.clone())
        })
    }
}

/// Single point of identity lookup within a loaded collection.
fn position_of(records: &[TaskRecord], id: &TaskId) -> Option<usize> {
    records.iter().position(|record| record.id == id.as_str())
}

fn restore_all(operation: &'static str, records: Vec<TaskRecord>) -> TaskRepositoryResult<Vec<Task>> {
    records
        .into_iter()
        .map(|record| {
            Task::try_from(record).map_err(|err| TaskRepositoryError::corrupt(operation, err))
        })
        .collect()
}

#[async_trait]
impl<S: TaskStore> TaskRepository for CollectionTaskRepository<S> {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        const OPERATION: &str = "save task";
        let mut records = self.load(OPERATION).await?;
        if position_of(&records, task.id()).is_some() {
            warn!(task_id = %task.id(), "rejected duplicate task");
            return Err(TaskRepositoryError::AlreadyExists(task.id().clone()));
        }

        records.push(task.to_record());
        self.write(OPERATION, &records).await
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Task> {
        const OPERATION: &str = "find task by id";
        let mut records = self.load(OPERATION).await?;
        let index = Self::require_position(OPERATION, &records, id)?;
        let record = records.swap_remove(index);
        Task::try_from(record).map_err(|err| TaskRepositoryError::corrupt(OPERATION, err))
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.load_matching("find all tasks", |_| true).await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        const OPERATION: &str = "update task";
        let mut records = self.load(OPERATION).await?;
        let index = Self::require_position(OPERATION, &records, task.id())?;
        if let Some(slot) = records.get_mut(index) {
            *slot = task.to_record();
        }
        self.write(OPERATION, &records).await
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        const OPERATION: &str = "delete task";
        let mut records = self.load(OPERATION).await?;
        let index = Self::require_position(OPERATION, &records, id)?;
        records.remove(index);
        self.write(OPERATION, &records).await
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        self.load_matching("find tasks by status", |task| task.status() == status)
            .await
    }

    async fn find_by_priority(&self, priority: TaskPriority) -> TaskRepositoryResult<Vec<Task>> {
        self.load_matching("find tasks by priority", |task| {
            task.priority() == priority
        })
        .await
    }

    async fn find_by_tag(&self, tag: &str) -> TaskRepositoryResult<Vec<Task>> {
        self.load_matching("find tasks by tag", |task| {
            task.tags().iter().any(|candidate| candidate == tag)
        })
        .await
    }
}
