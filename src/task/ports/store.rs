//! Store port: whole-collection load and replace.

use crate::task::domain::TaskRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Backing collection of persisted task records.
///
/// Stores only load and replace the full collection. They enforce no
/// identity rules and provide no locking across calls.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Loads every stored record in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the collection cannot be read or is not a
    /// sequence of records.
    async fn load_all(&self) -> Result<Vec<TaskRecord>, StoreError>;

    /// Replaces the stored collection with `records`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the collection cannot be written.
    async fn replace_all(&self, records: &[TaskRecord]) -> Result<(), StoreError>;
}

/// Errors returned by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored content could not be decoded or encoded.
    #[error("malformed store content: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Stored content is valid JSON but not a sequence of records.
    #[error("store content is not a sequence of records")]
    NotASequence,

    /// The store is unusable, for example after a panic while it was locked.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
