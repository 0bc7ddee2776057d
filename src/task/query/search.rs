//! Multi-criteria filtering and sorting used by search and listing.

use crate::task::domain::{Task, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use icu_collator::{Collator, CollatorBorrowed, options::CollatorOptions};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::warn;

/// Field a search result may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Priority ordinal (`low < medium < high`).
    Priority,
    /// Due date; tasks without one always sort last.
    DueDate,
    /// Creation instant.
    CreatedAt,
    /// Latest update instant.
    UpdatedAt,
    /// Description text, by Unicode collation.
    Description,
}

impl TryFrom<&str> for SortKey {
    type Error = ParseSortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "priority" => Ok(Self::Priority),
            "dueDate" | "due-date" | "due_date" => Ok(Self::DueDate),
            "createdAt" | "created-at" | "created_at" => Ok(Self::CreatedAt),
            "updatedAt" | "updated-at" | "updated_at" => Ok(Self::UpdatedAt),
            "description" => Ok(Self::Description),
            _ => Err(ParseSortError(value.to_owned())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl TryFrom<&str> for SortOrder {
    type Error = ParseSortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ParseSortError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a sort key or direction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort option: {0}")]
pub struct ParseSortError(pub String);

/// Search filters and ordering.
///
/// Every criterion that is set must match; unset criteria impose no
/// constraint. An empty tag list means "any tags".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    tags: Vec<String>,
    keyword: Option<String>,
    overdue: Option<bool>,
    done: Option<bool>,
    sort_key: Option<SortKey>,
    sort_order: SortOrder,
}

impl SearchCriteria {
    /// Creates criteria that match every task and keep input order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to one status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to one priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts results to tasks sharing at least one of `tags`.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts results to descriptions containing `keyword`, ignoring case.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Restricts results by overdue flag.
    #[must_use]
    pub fn with_overdue(mut self, overdue: bool) -> Self {
        self.overdue = Some(overdue);
        self
    }

    /// Restricts results by completion flag.
    #[must_use]
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    /// Sorts results by `key` in `order`.
    #[must_use]
    pub fn sorted_by(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_key = Some(key);
        self.sort_order = order;
        self
    }

    /// Returns `true` when `task` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task, now: DateTime<Utc>) -> bool {
        self.status.is_none_or(|status| task.status() == status)
            && self.priority.is_none_or(|priority| task.priority() == priority)
            && (self.tags.is_empty() || self.tags.iter().any(|tag| task.tags().contains(tag)))
            && self.keyword.as_deref().is_none_or(|keyword| {
                task.description()
                    .as_str()
                    .to_lowercase()
                    .contains(&keyword.to_lowercase())
            })
            && self.overdue.is_none_or(|overdue| task.is_overdue(now) == overdue)
            && self.done.is_none_or(|done| task.is_done() == done)
    }

    fn compare(
        &self,
        key: SortKey,
        collator: Option<&CollatorBorrowed<'_>>,
        a: &Task,
        b: &Task,
    ) -> Ordering {
        let order = self.sort_order;
        match key {
            SortKey::Priority => order.apply(a.priority().cmp(&b.priority())),
            SortKey::DueDate => match (a.due_date(), b.due_date()) {
                (Some(left), Some(right)) => order.apply(left.cmp(&right)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortKey::CreatedAt => order.apply(a.created_at().cmp(&b.created_at())),
            SortKey::UpdatedAt => order.apply(a.updated_at().cmp(&b.updated_at())),
            SortKey::Description => order.apply(compare_text(
                collator,
                a.description().as_str(),
                b.description().as_str(),
            )),
        }
    }
}

/// Collator for the root locale, used for description ordering.
fn root_collator() -> Option<CollatorBorrowed<'static>> {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .inspect_err(|err| warn!(error = %err, "collation data unavailable"))
        .ok()
}

fn compare_text(collator: Option<&CollatorBorrowed<'_>>, a: &str, b: &str) -> Ordering {
    collator.map_or_else(|| a.cmp(b), |collator| collator.compare(a, b))
}

/// Filters `tasks` by `criteria` and applies the requested ordering.
///
/// Without a sort key the input order is preserved. Sorting is stable, so
/// tasks that compare equal keep their relative order. Tasks without a due
/// date sort last by [`SortKey::DueDate`] in either direction. Descriptions
/// are compared with the root-locale Unicode collation.
#[must_use]
pub fn search<'a>(tasks: &'a [Task], criteria: &SearchCriteria, now: DateTime<Utc>) -> Vec<&'a Task> {
    let mut results: Vec<&Task> = tasks
        .iter()
        .filter(|task| criteria.matches(task, now))
        .collect();

    if let Some(key) = criteria.sort_key {
        let collator = (key == SortKey::Description).then(root_collator).flatten();
        results.sort_by(|a, b| criteria.compare(key, collator.as_ref(), a, b));
    }

    results
}
