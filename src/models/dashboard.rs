use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub name: &'static str,
    pub students: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingLecture {
    pub id: u32,
    pub title: &'static str,
    pub time: &'static str,
    pub room: &'static str,
    pub professor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub current_time: DateTime<Utc>,
    pub next_lecture: &'static str,
    pub stats: Vec<StatCard>,
    pub chart: Vec<ChartPoint>,
    pub upcoming_lectures: Vec<UpcomingLecture>,
}

impl DashboardSummary {
    /// Display figures are fixed; only the clock moves.
    pub fn at(current_time: DateTime<Utc>) -> Self {
        Self {
            current_time,
            next_lecture: "Advanced Mathematics in 15 minutes (Room 101)",
            stats: vec![
                StatCard { title: "Total Courses", value: "128", trend: "+6 from last semester" },
                StatCard { title: "Active Lectures", value: "87", trend: "+3 from last week" },
                StatCard { title: "Rooms Utilized", value: "85%", trend: "+2% from last week" },
                StatCard { title: "Faculty Members", value: "45", trend: "+2 new faculty members" },
                StatCard { title: "Time Conflicts", value: "3", trend: "-2 from last week" },
                StatCard { title: "Next Schedule Update", value: "2d", trend: "Automatic update scheduled" },
            ],
            chart: vec![
                ChartPoint { name: "Mon", students: 320 },
                ChartPoint { name: "Tue", students: 350 },
                ChartPoint { name: "Wed", students: 400 },
                ChartPoint { name: "Thu", students: 380 },
                ChartPoint { name: "Fri", students: 420 },
            ],
            upcoming_lectures: vec![
                UpcomingLecture { id: 1, title: "Advanced Mathematics", time: "10:00 AM", room: "Room 101", professor: "Dr. Smith" },
                UpcomingLecture { id: 2, title: "Physics Lab", time: "11:30 AM", room: "Lab 203", professor: "Dr. Johnson" },
                UpcomingLecture { id: 3, title: "Computer Science", time: "2:00 PM", room: "Room 405", professor: "Prof. Williams" },
            ],
        }
    }
}
