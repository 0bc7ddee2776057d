//! Calendar due dates compared at day granularity.

use super::{TaskValidationError, ValidatedField};
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

/// Storage format for due dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated task due date.
///
/// Due dates are whole UTC calendar days: any time of day is dropped on
/// construction, so the wrapped instant is always midnight UTC.
///
/// # Examples
///
///     use tasktrack::task::domain::DueDate;
///
///     let due = DueDate::parse("2025-03-01").expect("valid date");
///     assert_eq!(due.as_date_string(), "2025-03-01");
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DueDate(DateTime<Utc>);

impl DueDate {
    /// Creates a due date on the UTC calendar day of `instant`.
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self::from_day(instant.date_naive())
    }

    /// Creates a due date at midnight UTC of the given calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::InvalidDueDate`] when the components
    /// do not name a real calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TaskValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_day)
            .ok_or_else(|| TaskValidationError::InvalidDueDate(format!("{year}-{month}-{day}")))
    }

    /// Parses a due date from an RFC 3339 instant or a `YYYY-MM-DD` date.
    ///
    /// Only the UTC calendar day of an instant is kept.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::InvalidDueDate`] when the value is in
    /// neither format.
    pub fn parse(value: &str) -> Result<Self, TaskValidationError> {
        let trimmed = value.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::new(instant.with_timezone(&Utc)));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self::from_day)
            .map_err(|_| TaskValidationError::InvalidDueDate(value.to_owned()))
    }

    fn from_day(day: NaiveDate) -> Self {
        Self(day.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    /// Returns midnight UTC of the due day.
    #[must_use]
    pub const fn instant(self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the UTC calendar day of the due date.
    #[must_use]
    pub fn day(self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Returns `true` when the due day is strictly before the day of `now`.
    #[must_use]
    pub fn is_overdue_at(self, now: DateTime<Utc>) -> bool {
        self.day() < now.date_naive()
    }

    /// Returns `true` when the due day is the day of `now`.
    #[must_use]
    pub fn is_due_today_at(self, now: DateTime<Utc>) -> bool {
        self.day() == now.date_naive()
    }

    /// Returns whole days from the day of `now` to the due day.
    ///
    /// Negative when the due date has passed.
    #[must_use]
    pub fn days_until_due_at(self, now: DateTime<Utc>) -> i64 {
        (self.day() - now.date_naive()).num_days()
    }

    /// Returns the due day formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn as_date_string(self) -> String {
        self.day().format(DATE_FORMAT).to_string()
    }
}

impl ValidatedField for DueDate {
    const FIELD: &'static str = "dueDate";
    type Input = String;
    type Value = DateTime<Utc>;

    fn validate(input: String) -> Result<Self, TaskValidationError> {
        Self::parse(&input)
    }

    fn value(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for DueDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.day().format(DATE_FORMAT))
    }
}
