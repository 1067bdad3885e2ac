//! Stateless render endpoints: document in, markdown out.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::profile::ProfileData;
use crate::models::project::ProjectData;
use crate::render::{render_profile, render_project};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub markdown: String,
}

/// POST /api/v1/render/profile
pub async fn handle_render_profile(
    State(state): State<AppState>,
    Json(data): Json<ProfileData>,
) -> Json<RenderResponse> {
    Json(RenderResponse {
        markdown: render_profile(&data, &state.catalog),
    })
}

/// POST /api/v1/render/project
pub async fn handle_render_project(Json(data): Json<ProjectData>) -> Json<RenderResponse> {
    Json(RenderResponse {
        markdown: render_project(&data),
    })
}
