pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::editor::handlers;
use crate::render::handlers as render_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/catalog", get(handlers::handle_get_catalog))
        // Stateless rendering
        .route(
            "/api/v1/render/profile",
            post(render_handlers::handle_render_profile),
        )
        .route(
            "/api/v1/render/project",
            post(render_handlers::handle_render_project),
        )
        // Editor sessions
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/mode",
            put(handlers::handle_switch_mode),
        )
        .route("/api/v1/sessions/:id/copy", post(handlers::handle_copy))
        // Profile editing
        .route(
            "/api/v1/sessions/:id/profile",
            patch(handlers::handle_update_profile),
        )
        .route(
            "/api/v1/sessions/:id/profile/skills/toggle",
            post(handlers::handle_toggle_skill),
        )
        .route(
            "/api/v1/sessions/:id/profile/tools/toggle",
            post(handlers::handle_toggle_tool),
        )
        .route(
            "/api/v1/sessions/:id/profile/bio/refine",
            post(handlers::handle_refine_bio),
        )
        // Project editing
        .route(
            "/api/v1/sessions/:id/project",
            patch(handlers::handle_update_project),
        )
        .route(
            "/api/v1/sessions/:id/project/:section/refine",
            post(handlers::handle_refine_section),
        )
        .with_state(state)
}
