use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecturer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub office: String,
    pub faculty: String,
    pub course_ids: Vec<String>,
    pub module_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body for both create and full update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LecturerRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub office: String,
    pub faculty: String,
    #[serde(default)]
    pub course_ids: Vec<String>,
    #[serde(default)]
    pub module_ids: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LecturerQueryParams {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub faculty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

/// A lecturer's course and module ids resolved to display names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LecturerAssignments {
    pub lecturer_id: String,
    pub courses: Vec<NamedRef>,
    pub modules: Vec<NamedRef>,
}

impl Lecturer {
    pub fn matches(&self, params: &LecturerQueryParams) -> bool {
        super::contains_ignore_case(&self.name, &params.search)
            && super::field_equals(&self.faculty, &params.faculty)
    }

    pub fn from_request(id: String, req: LecturerRequest) -> Self {
        Self {
            id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            office: req.office,
            faculty: req.faculty,
            course_ids: req.course_ids,
            module_ids: req.module_ids,
            image_url: req.image_url,
        }
    }
}
