use axum::{Json, extract::State, response::IntoResponse};

use crate::routes::AppState;

/// GET /api/skills
pub async fn skills(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.resume.skills.clone())
}

/// GET /api/projects
pub async fn projects(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.resume.projects.clone())
}
