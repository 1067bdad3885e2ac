use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::editor::session::SessionStore;
use crate::refine::Refiner;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only skill/tool/badge catalog shared with the session store.
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore,
    /// Pluggable refinement backend. Default: Gemini via `LlmRefiner`.
    pub refiner: Arc<dyn Refiner>,
}
