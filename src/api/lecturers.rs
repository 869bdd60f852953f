use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::{debug, info};

use crate::db::repository;
use crate::error::{AppError, require};
use crate::models::*;
use crate::state::AppState;

fn validate_lecturer(req: &LecturerRequest) -> Result<(), AppError> {
    require("name", &req.name)?;
    require("email", &req.email)?;
    require("faculty", &req.faculty)
}

pub async fn list_lecturers(
    State(state): State<AppState>,
    Query(params): Query<LecturerQueryParams>,
) -> Json<Vec<Lecturer>> {
    let db = state.db.read().await;
    Json(repository::fetch_lecturers(&db, &params))
}

pub async fn get_lecturer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Lecturer>, AppError> {
    let db = state.db.read().await;
    let lecturer = repository::find_lecturer_by_id(&db, &id).ok_or(AppError::NotFound)?;
    Ok(Json(lecturer.clone()))
}

pub async fn create_lecturer(
    State(state): State<AppState>,
    Json(req): Json<LecturerRequest>,
) -> Result<Json<Lecturer>, AppError> {
    validate_lecturer(&req)?;
    let lecturer = repository::insert_lecturer(&mut *state.db.write().await, req);
    info!("Added lecturer {} ({})", lecturer.id, lecturer.name);
    Ok(Json(lecturer))
}

pub async fn update_lecturer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<LecturerRequest>,
) -> Result<Json<Lecturer>, AppError> {
    validate_lecturer(&req)?;
    let lecturer = repository::update_lecturer(&mut *state.db.write().await, &id, req)
        .ok_or(AppError::NotFound)?;
    Ok(Json(lecturer))
}

pub async fn delete_lecturer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    if !repository::delete_lecturer(&mut *state.db.write().await, &id) {
        debug!("delete of unknown lecturer {}", id);
    }
    StatusCode::NO_CONTENT
}

pub async fn lecturer_assignments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LecturerAssignments>, AppError> {
    let db = state.db.read().await;
    let assignments = repository::lecturer_assignments(&db, &id).ok_or(AppError::NotFound)?;
    Ok(Json(assignments))
}
