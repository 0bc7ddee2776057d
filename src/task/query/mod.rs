//! Stateless queries over task collections.
//!
//! Every function here borrows its input and returns new sequences or
//! values; none of them mutate tasks or raise domain errors, so they are
//! safe to call concurrently without coordination. Functions that depend on
//! the current day take an explicit reference instant.

mod filters;
mod ranking;
mod search;
mod stats;

pub use filters::{by_priority, by_status, overdue};
pub use ranking::{is_valid_status_transition, rank_by_urgency};
pub use search::{ParseSortError, SearchCriteria, SortKey, SortOrder, search};
pub use stats::{TaskStats, statistics};
