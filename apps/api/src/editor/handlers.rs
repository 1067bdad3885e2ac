//! Axum route handlers for editor sessions.
//!
//! Every handler that changes state answers with the regenerated session view:
//! that response is the content-change notification for the preview pane.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::editor::session::{CopyReceipt, RefineOutcome, SessionView};
use crate::errors::AppError;
use crate::models::profile::ProfilePatch;
use crate::models::project::ProjectPatch;
use crate::models::EditorMode;
use crate::refine::{ProjectSection, RefineTarget};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    pub mode: EditorMode,
}

#[derive(Debug, Deserialize)]
pub struct ToggleSkillRequest {
    pub category: String,
    pub item: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleToolRequest {
    pub tool: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/catalog
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<ModeRequest>,
) -> (StatusCode, Json<SessionView>) {
    (StatusCode::CREATED, Json(state.sessions.create(req.mode)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.sessions.get(id)?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/mode
pub async fn handle_switch_mode(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ModeRequest>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.sessions.switch_mode(id, req.mode)?))
}

/// PATCH /api/v1/sessions/:id/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<SessionView>, AppError> {
    if patch.is_empty() {
        return Err(AppError::Validation("No profile fields to update".to_string()));
    }
    Ok(Json(state.sessions.update_profile(id, |data| patch.apply(data))?))
}

/// POST /api/v1/sessions/:id/profile/skills/toggle
///
/// Only catalog chips can be toggled; the toggle itself is total.
pub async fn handle_toggle_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ToggleSkillRequest>,
) -> Result<Json<SessionView>, AppError> {
    if !state.catalog.has_skill(&req.category, &req.item) {
        return Err(AppError::Validation(format!(
            "'{}' is not a catalog skill in category '{}'",
            req.item, req.category
        )));
    }
    let view = state
        .sessions
        .update_profile(id, |data| data.with_skill_toggled(&req.category, &req.item))?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/profile/tools/toggle
pub async fn handle_toggle_tool(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ToggleToolRequest>,
) -> Result<Json<SessionView>, AppError> {
    if !state.catalog.has_tool(&req.tool) {
        return Err(AppError::Validation(format!(
            "'{}' is not a catalog tool",
            req.tool
        )));
    }
    let view = state
        .sessions
        .update_profile(id, |data| data.with_tool_toggled(&req.tool))?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/profile/bio/refine
pub async fn handle_refine_bio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RefineOutcome>, AppError> {
    let outcome = state
        .sessions
        .refine(id, RefineTarget::Bio, state.refiner.as_ref())
        .await?;
    Ok(Json(outcome))
}

/// PATCH /api/v1/sessions/:id/project
pub async fn handle_update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<SessionView>, AppError> {
    if patch.is_empty() {
        return Err(AppError::Validation("No project fields to update".to_string()));
    }
    Ok(Json(state.sessions.update_project(id, |data| patch.apply(data))?))
}

/// POST /api/v1/sessions/:id/project/:section/refine
pub async fn handle_refine_section(
    State(state): State<AppState>,
    Path((id, section)): Path<(Uuid, String)>,
) -> Result<Json<RefineOutcome>, AppError> {
    let section: ProjectSection = section.parse().map_err(AppError::Validation)?;
    let outcome = state
        .sessions
        .refine(id, RefineTarget::from(section), state.refiner.as_ref())
        .await?;
    Ok(Json(outcome))
}

/// POST /api/v1/sessions/:id/copy
pub async fn handle_copy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CopyReceipt>, AppError> {
    Ok(Json(state.sessions.copy(id)?))
}
