pub mod course;
pub mod dashboard;
pub mod lecture;
pub mod lecturer;
pub mod session;
pub mod shell;

pub use course::{Course, CourseQueryParams, Module, NewCourseRequest, NewModuleRequest, UpdateCourseRequest};
pub use dashboard::DashboardSummary;
pub use lecture::{Lecture, LectureQueryParams, LectureRequest, LectureStatus};
pub use lecturer::{Lecturer, LecturerAssignments, LecturerQueryParams, LecturerRequest, NamedRef};
pub use session::{ClassSession, GridCell, GridRow, ReorderRequest, UpdateSessionRequest};
pub use shell::{NavItem, SelectViewRequest, ShellState, Topbar, ViewKey};

/// Case-insensitive substring match; an empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Exact match unless the filter is cleared (empty or "all").
pub(crate) fn field_equals(value: &str, filter: &str) -> bool {
    filter.is_empty() || filter == "all" || value == filter
}
