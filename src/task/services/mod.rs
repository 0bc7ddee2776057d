//! Application services for task tracking.
//!
//! Services accept raw collaborator input, drive the domain and the
//! repository, and return plain response projections for presentation.

mod export;
mod requests;
mod statistics;
mod tasks;
mod view;

pub use export::{
    ExportFormat, ExportOptions, UnsupportedExportFormat, escape_csv_field, render_csv, render_json,
};
pub use requests::{CreateTaskRequest, UpdateTaskRequest};
pub use statistics::{PriorityCounts, StatusCounts, TaskStatistics};
pub use tasks::{TaskService, TaskServiceError, TaskServiceResult};
pub use view::TaskView;
