//! In-memory record collection.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::TaskRecord,
    ports::{StoreError, TaskStore},
};

/// Thread-safe in-memory record collection.
///
/// Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    records: Arc<RwLock<Vec<TaskRecord>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `records`.
    #[must_use]
    pub fn with_records(records: Vec<TaskRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn load_all(&self) -> Result<Vec<TaskRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(records.clone())
    }

    async fn replace_all(&self, records: &[TaskRecord]) -> Result<(), StoreError> {
        let mut stored = self
            .records
            .write()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        *stored = records.to_vec();
        Ok(())
    }
}
