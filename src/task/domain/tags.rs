//! Tag collections attached to tasks.

use super::{TaskValidationError, ValidatedField};
use std::collections::BTreeSet;
use std::fmt;

/// Maximum tag length in characters, measured after trimming.
const MAX_TAG_LENGTH: usize = 50;

/// Maximum number of distinct tags per task.
const MAX_TAGS: usize = 20;

/// Validated set of task tags.
///
/// Tags are trimmed on construction; blank entries are dropped and
/// duplicates collapse to one. Insertion order is kept for display, but
/// equality ignores it.
///
/// # Examples
///
///     use tasktrack::task::domain::TaskTags;
///
///     let tags = TaskTags::new(["work", " work ", "home"]).expect("valid tags");
///     assert_eq!(tags.len(), 2);
///     assert_eq!(tags, TaskTags::new(["home", "work"]).expect("valid tags"));
#[derive(Debug, Clone, Default)]
pub struct TaskTags(Vec<String>);

impl TaskTags {
    /// Creates a validated tag set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::TagTooLong`] when a tag exceeds the
    /// length limit, or [`TaskValidationError::TooManyTags`] as soon as more
    /// than `MAX_TAGS` distinct tags have been read.
    pub fn new<I, S>(tags: I) -> Result<Self, TaskValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        let mut seen: BTreeSet<String> = BTreeSet::new();
        for tag in tags {
            let trimmed = tag.as_ref().trim();
            if trimmed.is_empty() || seen.contains(trimmed) {
                continue;
            }
            check_tag_length(trimmed)?;
            if normalized.len() == MAX_TAGS {
                return Err(TaskValidationError::TooManyTags { max: MAX_TAGS });
            }
            seen.insert(trimmed.to_owned());
            normalized.push(trimmed.to_owned());
        }

        Ok(Self(normalized))
    }

    /// Creates an empty tag set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Parses a comma-separated tag list such as `"work, urgent"`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::new`].
    pub fn from_comma_separated(value: &str) -> Result<Self, TaskValidationError> {
        Self::new(value.split(','))
    }

    /// Returns a new set with `tag` added.
    ///
    /// Adding a tag that is already present returns an unchanged copy.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::EmptyTag`] for a blank tag,
    /// [`TaskValidationError::TagTooLong`] when it exceeds the length limit,
    /// or [`TaskValidationError::TooManyTags`] when the set is full.
    pub fn add(&self, tag: &str) -> Result<Self, TaskValidationError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyTag);
        }
        check_tag_length(trimmed)?;
        if self.contains(trimmed) {
            return Ok(self.clone());
        }
        if self.0.len() >= MAX_TAGS {
            return Err(TaskValidationError::TooManyTags { max: MAX_TAGS });
        }

        let mut tags = self.0.clone();
        tags.push(trimmed.to_owned());
        Ok(Self(tags))
    }

    /// Returns a new set without `tag`.
    #[must_use]
    pub fn remove(&self, tag: &str) -> Self {
        let trimmed = tag.trim();
        Self(
            self.0
                .iter()
                .filter(|existing| existing.as_str() != trimmed)
                .cloned()
                .collect(),
        )
    }

    /// Returns `true` when the set holds `tag` (compared after trimming).
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        let trimmed = tag.trim();
        self.0.iter().any(|existing| existing == trimmed)
    }

    /// Returns `true` when the set holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the tags as owned strings in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }

    fn as_set(&self) -> BTreeSet<&str> {
        self.iter().collect()
    }
}

fn check_tag_length(tag: &str) -> Result<(), TaskValidationError> {
    if tag.chars().count() > MAX_TAG_LENGTH {
        return Err(TaskValidationError::TagTooLong {
            tag: tag.to_owned(),
            max: MAX_TAG_LENGTH,
        });
    }
    Ok(())
}

impl PartialEq for TaskTags {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.as_set() == other.as_set()
    }
}

impl Eq for TaskTags {}

impl ValidatedField for TaskTags {
    const FIELD: &'static str = "tags";
    type Input = Vec<String>;
    type Value = [String];

    fn validate(input: Vec<String>) -> Result<Self, TaskValidationError> {
        Self::new(input)
    }

    fn value(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for TaskTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
