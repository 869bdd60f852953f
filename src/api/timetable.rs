use axum::Json;
use axum::extract::{Path, State};

use crate::db::repository;
use crate::error::AppError;
use crate::models::*;
use crate::services::timetable;
use crate::state::AppState;

pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<ClassSession>> {
    let db = state.db.read().await;
    Json(repository::fetch_sessions(&db))
}

pub async fn session_grid(State(state): State<AppState>) -> Json<Vec<GridRow>> {
    let db = state.db.read().await;
    Json(timetable::grid(&db.sessions))
}

pub async fn reorder_sessions(
    State(state): State<AppState>,
    Json(req): Json<ReorderRequest>,
) -> Json<Vec<ClassSession>> {
    let sessions = state.timetable().reorder(&req.active, &req.over).await;
    Json(sessions)
}

pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSessionRequest>,
) -> Result<Json<ClassSession>, AppError> {
    let session = state.timetable().update_session(&id, req).await?;
    Ok(Json(session))
}
