pub mod repository;

use crate::models::{ClassSession, Course, Lecture, LectureStatus, Lecturer, Module};

/// In-memory collections backing every screen. Seeded on start-up, nothing
/// is persisted.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub courses: Vec<Course>,
    pub lecturers: Vec<Lecturer>,
    pub lectures: Vec<Lecture>,
    pub sessions: Vec<ClassSession>,
}

impl Store {
    pub fn seeded() -> Self {
        Self {
            courses: seed_courses(),
            lecturers: seed_lecturers(),
            lectures: seed_lectures(),
            sessions: seed_sessions(),
        }
    }
}

fn module(id: &str, name: &str, description: &str) -> Module {
    Module {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn seed_courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            name: "Introduction to Computer Science".to_string(),
            description: "A foundational course covering basic programming concepts".to_string(),
            department: "Computer Science".to_string(),
            level: "Undergraduate".to_string(),
            modules: vec![
                module("1-1", "Programming Basics", "Introduction to programming concepts"),
                module("1-2", "Data Structures", "Fundamental data structures in computer science"),
            ],
        },
        Course {
            id: "2".to_string(),
            name: "Advanced Mathematics".to_string(),
            description: "In-depth study of advanced mathematical concepts".to_string(),
            department: "Mathematics".to_string(),
            level: "Graduate".to_string(),
            modules: vec![
                module("2-1", "Linear Algebra", "Study of linear equations and matrices"),
                module("2-2", "Calculus III", "Multivariable calculus and its applications"),
            ],
        },
    ]
}

fn seed_lecturers() -> Vec<Lecturer> {
    vec![
        Lecturer {
            id: "1".to_string(),
            name: "Dr. Jane Smith".to_string(),
            email: "jane.smith@university.edu".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            office: "Building A, Room 101".to_string(),
            faculty: "Computer Science".to_string(),
            course_ids: strings(&["1", "2"]),
            module_ids: strings(&["1-1", "1-2", "2-1"]),
            image_url: Some("https://i.pravatar.cc/150?img=1".to_string()),
        },
        Lecturer {
            id: "2".to_string(),
            name: "Prof. John Doe".to_string(),
            email: "john.doe@university.edu".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            office: "Building B, Room 205".to_string(),
            faculty: "Mathematics".to_string(),
            course_ids: strings(&["2"]),
            module_ids: strings(&["2-1", "2-2"]),
            image_url: Some("https://i.pravatar.cc/150?img=2".to_string()),
        },
    ]
}

fn seed_lectures() -> Vec<Lecture> {
    vec![
        Lecture {
            id: "1".to_string(),
            course_id: "1".to_string(),
            course_name: "Introduction to Computer Science".to_string(),
            lecturer_id: "1".to_string(),
            lecturer_name: "Dr. Jane Smith".to_string(),
            day: "Monday".to_string(),
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            room: "Room A101".to_string(),
            is_recurring: true,
            status: LectureStatus::Scheduled,
        },
        Lecture {
            id: "2".to_string(),
            course_id: "2".to_string(),
            course_name: "Advanced Mathematics".to_string(),
            lecturer_id: "2".to_string(),
            lecturer_name: "Prof. John Doe".to_string(),
            day: "Tuesday".to_string(),
            start_time: "14:00".to_string(),
            end_time: "16:00".to_string(),
            room: "Room B205".to_string(),
            is_recurring: true,
            status: LectureStatus::Scheduled,
        },
    ]
}

fn seed_sessions() -> Vec<ClassSession> {
    let session = |id: &str, title: &str, room: &str, day, hour| ClassSession {
        id: id.to_string(),
        title: title.to_string(),
        room: room.to_string(),
        day,
        hour,
    };
    vec![
        session("1", "CS101", "Room 301", 1, 9),
        session("2", "MATH201", "Room 201", 2, 11),
        session("3", "PHYS301", "Room 101", 3, 14),
    ]
}
