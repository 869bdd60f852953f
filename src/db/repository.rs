use crate::db::Store;
use crate::models::{
    ClassSession, Course, CourseQueryParams, Lecture, LectureQueryParams, LectureRequest, LectureStatus,
    Lecturer, LecturerAssignments, LecturerQueryParams, LecturerRequest, Module, NamedRef, NewCourseRequest,
    NewModuleRequest, UpdateCourseRequest,
};

/// `count + 1`, bumped past ids that survived earlier deletions.
fn next_id<'a>(existing: impl Iterator<Item = &'a str> + Clone, count: usize) -> String {
    let mut n = count + 1;
    loop {
        let candidate = n.to_string();
        if !existing.clone().any(|id| id == candidate) {
            return candidate;
        }
        n += 1;
    }
}

fn next_module_id(course: &Course) -> String {
    let mut n = course.modules.len() + 1;
    loop {
        let candidate = format!("{}-{}", course.id, n);
        if !course.modules.iter().any(|m| m.id == candidate) {
            return candidate;
        }
        n += 1;
    }
}

// Courses

pub fn fetch_courses(db: &Store, params: &CourseQueryParams) -> Vec<Course> {
    db.courses.iter().filter(|c| c.matches(params)).cloned().collect()
}

pub fn find_course_by_id<'a>(db: &'a Store, id: &str) -> Option<&'a Course> {
    db.courses.iter().find(|c| c.id == id)
}

pub fn insert_course(db: &mut Store, req: NewCourseRequest) -> Course {
    let id = next_id(db.courses.iter().map(|c| c.id.as_str()), db.courses.len());
    let course = Course {
        id,
        name: req.name,
        description: req.description,
        department: req.department,
        level: req.level,
        modules: Vec::new(),
    };
    db.courses.push(course.clone());
    course
}

pub fn update_course(db: &mut Store, id: &str, req: UpdateCourseRequest) -> Option<Course> {
    let current = db.courses.iter_mut().find(|c| c.id == id)?;

    current.name = req.name;
    current.description = req.description;
    current.department = req.department;
    current.level = req.level;
    if let Some(modules) = req.modules {
        current.modules = modules;
    }
    let updated = current.clone();

    for lecture in db.lectures.iter_mut().filter(|l| l.course_id == id) {
        lecture.course_name = updated.name.clone();
    }

    Some(updated)
}

/// Lecturer references and lectures pointing at the course are left alone.
pub fn delete_course(db: &mut Store, id: &str) -> bool {
    let before = db.courses.len();
    db.courses.retain(|c| c.id != id);
    db.courses.len() < before
}

pub fn insert_module(db: &mut Store, course_id: &str, req: NewModuleRequest) -> Option<Module> {
    let course = db.courses.iter_mut().find(|c| c.id == course_id)?;
    let module = Module {
        id: next_module_id(course),
        name: req.name,
        description: req.description,
    };
    course.modules.push(module.clone());
    Some(module)
}

pub fn update_module(
    db: &mut Store,
    course_id: &str,
    module_id: &str,
    req: NewModuleRequest,
) -> Option<Module> {
    let course = db.courses.iter_mut().find(|c| c.id == course_id)?;
    let module = course.modules.iter_mut().find(|m| m.id == module_id)?;
    module.name = req.name;
    module.description = req.description;
    Some(module.clone())
}

/// `None` when the course is unknown; otherwise whether a module was removed.
pub fn delete_module(db: &mut Store, course_id: &str, module_id: &str) -> Option<bool> {
    let course = db.courses.iter_mut().find(|c| c.id == course_id)?;
    let before = course.modules.len();
    course.modules.retain(|m| m.id != module_id);
    Some(course.modules.len() < before)
}

// Lecturers

pub fn fetch_lecturers(db: &Store, params: &LecturerQueryParams) -> Vec<Lecturer> {
    db.lecturers.iter().filter(|l| l.matches(params)).cloned().collect()
}

pub fn find_lecturer_by_id<'a>(db: &'a Store, id: &str) -> Option<&'a Lecturer> {
    db.lecturers.iter().find(|l| l.id == id)
}

pub fn insert_lecturer(db: &mut Store, req: LecturerRequest) -> Lecturer {
    let id = next_id(db.lecturers.iter().map(|l| l.id.as_str()), db.lecturers.len());
    let lecturer = Lecturer::from_request(id, req);
    db.lecturers.push(lecturer.clone());
    lecturer
}

pub fn update_lecturer(db: &mut Store, id: &str, req: LecturerRequest) -> Option<Lecturer> {
    let current = db.lecturers.iter_mut().find(|l| l.id == id)?;
    *current = Lecturer::from_request(id.to_string(), req);
    let updated = current.clone();

    for lecture in db.lectures.iter_mut().filter(|l| l.lecturer_id == id) {
        lecture.lecturer_name = updated.name.clone();
    }

    Some(updated)
}

pub fn delete_lecturer(db: &mut Store, id: &str) -> bool {
    let before = db.lecturers.len();
    db.lecturers.retain(|l| l.id != id);
    db.lecturers.len() < before
}

pub fn lecturer_assignments(db: &Store, id: &str) -> Option<LecturerAssignments> {
    let lecturer = find_lecturer_by_id(db, id)?;

    let courses = lecturer
        .course_ids
        .iter()
        .filter_map(|cid| find_course_by_id(db, cid))
        .map(|c| NamedRef { id: c.id.clone(), name: c.name.clone() })
        .collect();

    let modules = lecturer
        .module_ids
        .iter()
        .filter_map(|mid| {
            db.courses
                .iter()
                .flat_map(|c| c.modules.iter())
                .find(|m| &m.id == mid)
        })
        .map(|m| NamedRef { id: m.id.clone(), name: m.name.clone() })
        .collect();

    Some(LecturerAssignments {
        lecturer_id: lecturer.id.clone(),
        courses,
        modules,
    })
}

// Lectures

pub fn fetch_lectures(db: &Store, params: &LectureQueryParams) -> Vec<Lecture> {
    db.lectures.iter().filter(|l| l.matches(params)).cloned().collect()
}

/// Names come from the current collections; unknown ids give an empty name.
fn build_lecture(db: &Store, id: String, req: LectureRequest, status: LectureStatus) -> Lecture {
    let course_name = find_course_by_id(db, &req.course_id)
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let lecturer_name = find_lecturer_by_id(db, &req.lecturer_id)
        .map(|l| l.name.clone())
        .unwrap_or_default();

    Lecture {
        id,
        course_id: req.course_id,
        course_name,
        lecturer_id: req.lecturer_id,
        lecturer_name,
        day: req.day,
        start_time: req.start_time,
        end_time: req.end_time,
        room: req.room,
        is_recurring: req.is_recurring,
        status,
    }
}

pub fn insert_lecture(db: &mut Store, req: LectureRequest) -> Lecture {
    let id = next_id(db.lectures.iter().map(|l| l.id.as_str()), db.lectures.len());
    let status = req.status.unwrap_or_default();
    let lecture = build_lecture(db, id, req, status);
    db.lectures.push(lecture.clone());
    lecture
}

pub fn update_lecture(db: &mut Store, id: &str, req: LectureRequest) -> Option<Lecture> {
    let index = db.lectures.iter().position(|l| l.id == id)?;
    let status = req.status.unwrap_or(db.lectures[index].status);
    let lecture = build_lecture(db, id.to_string(), req, status);
    db.lectures[index] = lecture.clone();
    Some(lecture)
}

pub fn find_lecture_by_id<'a>(db: &'a Store, id: &str) -> Option<&'a Lecture> {
    db.lectures.iter().find(|l| l.id == id)
}

pub fn delete_lecture(db: &mut Store, id: &str) -> bool {
    let before = db.lectures.len();
    db.lectures.retain(|l| l.id != id);
    db.lectures.len() < before
}

pub fn cancel_lecture(db: &mut Store, id: &str) -> Option<Lecture> {
    let lecture = db.lectures.iter_mut().find(|l| l.id == id)?;
    lecture.status = LectureStatus::Cancelled;
    Some(lecture.clone())
}

// Sessions

pub fn fetch_sessions(db: &Store) -> Vec<ClassSession> {
    db.sessions.clone()
}
