mod courses;
mod lecturers;
mod lectures;
mod timetable;

use axum::Json;
use axum::routing::{post, put};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use chrono::Utc;
use tracing::debug;

use crate::models::*;
use crate::services::ScheduleEvent;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/dashboard", get(dashboard))
        .route("/navigation", get(navigation))
        .route("/topbar", get(topbar))
        .route("/shell", get(shell))
        .route("/shell/view", post(select_view))
        .route("/shell/dark-mode", post(toggle_dark_mode))
        .route("/shell/sidebar", post(toggle_sidebar))
        .route("/notifications", get(notifications))
        .route("/courses", get(courses::list_courses).post(courses::create_course))
        .route(
            "/courses/{id}",
            get(courses::get_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        .route("/courses/{id}/modules", post(courses::create_module))
        .route(
            "/courses/{id}/modules/{module_id}",
            put(courses::update_module).delete(courses::delete_module),
        )
        .route("/lecturers", get(lecturers::list_lecturers).post(lecturers::create_lecturer))
        .route(
            "/lecturers/{id}",
            get(lecturers::get_lecturer)
                .put(lecturers::update_lecturer)
                .delete(lecturers::delete_lecturer),
        )
        .route("/lecturers/{id}/assignments", get(lecturers::lecturer_assignments))
        .route("/lectures", get(lectures::list_lectures).post(lectures::create_lecture))
        .route(
            "/lectures/{id}",
            get(lectures::get_lecture)
                .put(lectures::update_lecture)
                .delete(lectures::delete_lecture),
        )
        .route("/lectures/{id}/cancel", post(lectures::cancel_lecture))
        .route("/timetable", get(timetable::list_sessions))
        .route("/timetable/grid", get(timetable::session_grid))
        .route("/timetable/reorder", post(timetable::reorder_sessions))
        .route("/timetable/sessions/{id}", put(timetable::update_session))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn dashboard() -> Json<DashboardSummary> {
    Json(DashboardSummary::at(Utc::now()))
}

async fn navigation() -> Json<Vec<NavItem>> {
    let items = ViewKey::ALL
        .iter()
        .map(|key| NavItem { key: *key, label: key.label() })
        .collect();
    Json(items)
}

async fn topbar() -> Json<Topbar> {
    Json(Topbar::default())
}

async fn shell(State(state): State<AppState>) -> Json<ShellState> {
    Json(state.shell.read().await.clone())
}

async fn select_view(
    State(state): State<AppState>,
    Json(req): Json<SelectViewRequest>,
) -> Json<ShellState> {
    let mut shell = state.shell.write().await;
    shell.active_view = ViewKey::parse(&req.view);
    debug!("active view: {:?}", shell.active_view);
    Json(shell.clone())
}

async fn toggle_dark_mode(State(state): State<AppState>) -> Json<ShellState> {
    let mut shell = state.shell.write().await;
    shell.dark_mode = !shell.dark_mode;
    Json(shell.clone())
}

async fn toggle_sidebar(State(state): State<AppState>) -> Json<ShellState> {
    let mut shell = state.shell.write().await;
    shell.sidebar_open = !shell.sidebar_open;
    Json(shell.clone())
}

async fn notifications(State(state): State<AppState>) -> Json<Vec<ScheduleEvent>> {
    Json(state.channel.recent())
}
