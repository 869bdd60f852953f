use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::{debug, info};

use crate::db::repository;
use crate::error::{AppError, require};
use crate::models::*;
use crate::state::AppState;

fn validate_course(name: &str, department: &str, level: &str) -> Result<(), AppError> {
    require("name", name)?;
    require("department", department)?;
    require("level", level)
}

pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Json<Vec<Course>> {
    let db = state.db.read().await;
    Json(repository::fetch_courses(&db, &params))
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, AppError> {
    let db = state.db.read().await;
    let course = repository::find_course_by_id(&db, &id).ok_or(AppError::NotFound)?;
    Ok(Json(course.clone()))
}

pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<NewCourseRequest>,
) -> Result<Json<Course>, AppError> {
    validate_course(&req.name, &req.department, &req.level)?;
    let course = repository::insert_course(&mut *state.db.write().await, req);
    info!("Added course {} ({})", course.id, course.name);
    Ok(Json(course))
}

pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCourseRequest>,
) -> Result<Json<Course>, AppError> {
    validate_course(&req.name, &req.department, &req.level)?;
    let course = repository::update_course(&mut *state.db.write().await, &id, req)
        .ok_or(AppError::NotFound)?;
    Ok(Json(course))
}

pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    if !repository::delete_course(&mut *state.db.write().await, &id) {
        debug!("delete of unknown course {}", id);
    }
    StatusCode::NO_CONTENT
}

pub async fn create_module(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(req): Json<NewModuleRequest>,
) -> Result<Json<Module>, AppError> {
    require("name", &req.name)?;
    let module = repository::insert_module(&mut *state.db.write().await, &course_id, req)
        .ok_or(AppError::NotFound)?;
    Ok(Json(module))
}

pub async fn update_module(
    State(state): State<AppState>,
    Path((course_id, module_id)): Path<(String, String)>,
    Json(req): Json<NewModuleRequest>,
) -> Result<Json<Module>, AppError> {
    require("name", &req.name)?;
    let module = repository::update_module(&mut *state.db.write().await, &course_id, &module_id, req)
        .ok_or(AppError::NotFound)?;
    Ok(Json(module))
}

pub async fn delete_module(
    State(state): State<AppState>,
    Path((course_id, module_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    repository::delete_module(&mut *state.db.write().await, &course_id, &module_id)
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}
