//! Domain model for task tracking.
//!
//! Every field of a task is a self-validating value type; the [`Task`]
//! aggregate composes them and never mutates in place. Infrastructure
//! concerns stay outside of the domain boundary.

mod description;
mod due_date;
mod error;
mod field;
mod ids;
mod priority;
mod record;
mod status;
mod tags;
mod task;

pub use description::TaskDescription;
pub use due_date::DueDate;
pub use error::TaskValidationError;
pub use field::ValidatedField;
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use record::TaskRecord;
pub use status::TaskStatus;
pub use tags::TaskTags;
pub use task::{NewTask, PersistedTaskData, Task};
