use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::{debug, info};

use crate::db::repository;
use crate::error::{AppError, require};
use crate::models::*;
use crate::state::AppState;

fn validate_lecture(req: &LectureRequest) -> Result<(), AppError> {
    require("courseId", &req.course_id)?;
    require("lecturerId", &req.lecturer_id)?;
    require("day", &req.day)?;
    require("startTime", &req.start_time)?;
    require("endTime", &req.end_time)?;
    require("room", &req.room)
}

pub async fn list_lectures(
    State(state): State<AppState>,
    Query(params): Query<LectureQueryParams>,
) -> Json<Vec<Lecture>> {
    let db = state.db.read().await;
    Json(repository::fetch_lectures(&db, &params))
}

pub async fn get_lecture(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Lecture>, AppError> {
    let db = state.db.read().await;
    let lecture = repository::find_lecture_by_id(&db, &id).ok_or(AppError::NotFound)?;
    Ok(Json(lecture.clone()))
}

pub async fn create_lecture(
    State(state): State<AppState>,
    Json(req): Json<LectureRequest>,
) -> Result<Json<Lecture>, AppError> {
    validate_lecture(&req)?;
    let lecture = repository::insert_lecture(&mut *state.db.write().await, req);
    info!("Added lecture {} ({} on {})", lecture.id, lecture.course_name, lecture.day);
    Ok(Json(lecture))
}

pub async fn update_lecture(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<LectureRequest>,
) -> Result<Json<Lecture>, AppError> {
    validate_lecture(&req)?;
    let lecture = repository::update_lecture(&mut *state.db.write().await, &id, req)
        .ok_or(AppError::NotFound)?;
    Ok(Json(lecture))
}

pub async fn delete_lecture(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    if !repository::delete_lecture(&mut *state.db.write().await, &id) {
        debug!("delete of unknown lecture {}", id);
    }
    StatusCode::NO_CONTENT
}

pub async fn cancel_lecture(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Lecture>, AppError> {
    let lecture = repository::cancel_lecture(&mut *state.db.write().await, &id)
        .ok_or(AppError::NotFound)?;
    info!("Cancelled lecture {}", lecture.id);
    Ok(Json(lecture))
}
