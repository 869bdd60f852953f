use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKey {
    #[default]
    Dashboard,
    Timetable,
    Lectures,
    Lecturer,
    Courses,
    Settings,
}

impl ViewKey {
    pub const ALL: [ViewKey; 6] = [
        ViewKey::Dashboard,
        ViewKey::Timetable,
        ViewKey::Lectures,
        ViewKey::Lecturer,
        ViewKey::Courses,
        ViewKey::Settings,
    ];

    /// Unknown keys land on the dashboard.
    pub fn parse(key: &str) -> Self {
        match key {
            "timetable" => ViewKey::Timetable,
            "lectures" => ViewKey::Lectures,
            "lecturer" => ViewKey::Lecturer,
            "courses" => ViewKey::Courses,
            "settings" => ViewKey::Settings,
            _ => ViewKey::Dashboard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewKey::Dashboard => "Dashboard",
            ViewKey::Timetable => "Timetable",
            ViewKey::Lectures => "Lectures",
            ViewKey::Lecturer => "Lecturer",
            ViewKey::Courses => "Courses",
            ViewKey::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellState {
    pub active_view: ViewKey,
    pub dark_mode: bool,
    pub sidebar_open: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectViewRequest {
    pub view: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub key: ViewKey,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Topbar {
    pub notifications: Vec<&'static str>,
    pub account: Vec<&'static str>,
}

impl Default for Topbar {
    fn default() -> Self {
        Self {
            notifications: vec!["New schedule update", "Room change alert"],
            account: vec!["Profile", "Settings", "Log out"],
        }
    }
}
