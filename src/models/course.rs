use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub description: String,
    pub department: String,
    pub level: String,
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourseRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub department: String,
    pub level: String,
}

/// Full replacement of a course. `modules` is kept as-is when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub department: String,
    pub level: String,
    pub modules: Option<Vec<Module>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewModuleRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseQueryParams {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub level: String,
}

impl Course {
    pub fn matches(&self, params: &CourseQueryParams) -> bool {
        super::contains_ignore_case(&self.name, &params.search)
            && super::field_equals(&self.department, &params.department)
            && super::field_equals(&self.level, &params.level)
    }
}
