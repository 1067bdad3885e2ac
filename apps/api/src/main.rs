mod catalog;
mod config;
mod editor;
mod errors;
mod llm_client;
mod models;
mod refine;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::editor::session::SessionStore;
use crate::llm_client::LlmClient;
use crate::refine::LlmRefiner;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Selectable skills and tools
    let catalog = match &config.catalog_path {
        Some(path) => {
            let catalog = Catalog::from_file(path)?;
            info!("Catalog loaded from {}", path.display());
            catalog
        }
        None => Catalog::builtin(),
    };
    let catalog = Arc::new(catalog);
    info!(
        "Catalog: {} skill categories, {} tools, {} badges",
        catalog.skills.len(),
        catalog.tools.len(),
        catalog.badges.len()
    );

    // Refinement backend. A missing key only fails refinement requests.
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_model.clone());
    if llm.has_api_key() {
        info!("LLM client initialized (model: {})", llm.model());
    } else {
        warn!("GEMINI_API_KEY not set; refinement requests will fail");
    }
    let refiner = Arc::new(LlmRefiner(llm));

    let sessions = SessionStore::new(
        Arc::clone(&catalog),
        chrono::Duration::milliseconds(config.copy_ack_ms),
    );

    let _sweeper = sessions.spawn_idle_sweeper(
        Duration::from_secs(config.session_idle_ttl_secs),
        Duration::from_secs(config.session_sweep_secs),
    );
    info!(
        "Idle sessions expire after {}s (swept every {}s)",
        config.session_idle_ttl_secs, config.session_sweep_secs
    );

    let state = AppState {
        config: config.clone(),
        catalog,
        sessions,
        refiner,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
