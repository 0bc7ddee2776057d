//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.
//! [`TaskStore`] is the raw collection primitive a backing store provides;
//! [`TaskRepository`] is the identity-aware contract built on top of it.

pub mod repository;
pub mod store;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use store::{StoreError, TaskStore};
