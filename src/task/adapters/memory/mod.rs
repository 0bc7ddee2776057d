//! In-memory task store.

mod store;

pub use store::InMemoryTaskStore;

use super::CollectionTaskRepository;

/// Repository over an in-memory store, used by tests and embedders.
pub type InMemoryTaskRepository = CollectionTaskRepository<InMemoryTaskStore>;
