use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LectureStatus {
    #[default]
    Scheduled,
    Cancelled,
    Completed,
}

impl LectureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LectureStatus::Scheduled => "scheduled",
            LectureStatus::Cancelled => "cancelled",
            LectureStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub lecturer_id: String,
    pub lecturer_name: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub is_recurring: bool,
    pub status: LectureStatus,
}

/// Body for both create and full update. Names are resolved server-side.
/// A missing `status` means scheduled on create and unchanged on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureRequest {
    pub course_id: String,
    pub lecturer_id: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub status: Option<LectureStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LectureQueryParams {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub status: String,
}

impl Lecture {
    pub fn matches(&self, params: &LectureQueryParams) -> bool {
        (super::contains_ignore_case(&self.course_name, &params.search)
            || super::contains_ignore_case(&self.lecturer_name, &params.search))
            && super::field_equals(&self.day, &params.day)
            && super::field_equals(self.status.as_str(), &params.status)
    }
}
