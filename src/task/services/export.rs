//! JSON and CSV rendering of task views.

use super::TaskView;
use std::borrow::Cow;
use thiserror::Error;

/// CSV header row, in column order.
const CSV_HEADERS: [&str; 10] = [
    "ID",
    "Description",
    "Status",
    "Priority",
    "Due Date",
    "Tags",
    "Created At",
    "Updated At",
    "Is Overdue",
    "Is Done",
];

/// Separator between tags inside the CSV tags column.
const CSV_TAG_SEPARATOR: &str = ";";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// A JSON array of task views.
    Json,
    /// Comma-separated values, one task per line.
    Csv,
}

/// Error returned for an unknown export format name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported export format: {0}")]
pub struct UnsupportedExportFormat(pub String);

impl TryFrom<&str> for ExportFormat {
    type Error = UnsupportedExportFormat;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(UnsupportedExportFormat(value.to_owned())),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    format: ExportFormat,
    pretty: bool,
    include_headers: bool,
}

impl ExportOptions {
    /// Creates options for `format` with pretty JSON and a CSV header row.
    #[must_use]
    pub const fn new(format: ExportFormat) -> Self {
        Self {
            format,
            pretty: true,
            include_headers: true,
        }
    }

    /// Emits single-line JSON.
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Omits the CSV header row.
    #[must_use]
    pub const fn without_headers(mut self) -> Self {
        self.include_headers = false;
        self
    }

    /// Returns the selected format.
    #[must_use]
    pub const fn format(self) -> ExportFormat {
        self.format
    }

    /// Renders `views` according to these options.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when JSON serialization fails.
    pub fn render(self, views: &[TaskView]) -> Result<String, serde_json::Error> {
        match self.format {
            ExportFormat::Json => render_json(views, self.pretty),
            ExportFormat::Csv => Ok(render_csv(views, self.include_headers)),
        }
    }
}

/// Renders `views` as a JSON array.
///
/// # Errors
///
/// Returns [`serde_json::Error`] when serialization fails.
pub fn render_json(views: &[TaskView], pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(views)
    } else {
        serde_json::to_string(views)
    }
}

/// Renders `views` as CSV lines joined by `\n`.
#[must_use]
pub fn render_csv(views: &[TaskView], include_headers: bool) -> String {
    let mut lines = Vec::with_capacity(views.len() + 1);
    if include_headers {
        lines.push(csv_line(CSV_HEADERS));
    }
    for view in views {
        let record = &view.record;
        let tags = record.tags.join(CSV_TAG_SEPARATOR);
        lines.push(csv_line([
            record.id.as_str(),
            record.description.as_str(),
            record.status.as_str(),
            record.priority.as_str(),
            record.due_date.as_deref().unwrap_or_default(),
            tags.as_str(),
            record.created_at.as_str(),
            record.updated_at.as_str(),
            bool_field(view.is_overdue),
            bool_field(view.is_done),
        ]));
    }
    lines.join("\n")
}

const fn bool_field(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn csv_line<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .map(escape_csv_field)
        .collect::<Vec<_>>()
        .join(",")
}

/// Quotes a CSV field when it contains a comma, double quote, or line
/// break, doubling any inner double quotes.
#[must_use]
pub fn escape_csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
