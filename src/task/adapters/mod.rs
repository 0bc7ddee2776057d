//! Adapter implementations of the task persistence ports.

pub mod collection;
pub mod json_file;
pub mod memory;

pub use collection::CollectionTaskRepository;
pub use json_file::JsonFileTaskStore;
pub use memory::{InMemoryTaskRepository, InMemoryTaskStore};
