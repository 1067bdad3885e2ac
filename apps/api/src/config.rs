use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::editor::session::{
    DEFAULT_COPY_ACK_MS, DEFAULT_SESSION_IDLE_TTL_SECS, DEFAULT_SESSION_SWEEP_SECS,
};
use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
///
/// Nothing here is required: a missing Gemini key only disables refinement,
/// and is reported when a refinement is attempted.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub catalog_path: Option<PathBuf>,
    pub copy_ack_ms: i64,
    pub session_idle_ttl_secs: u64,
    pub session_sweep_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: optional_env("GEMINI_API_KEY").or_else(|| optional_env("API_KEY")),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            catalog_path: optional_env("CATALOG_PATH").map(PathBuf::from),
            copy_ack_ms: match optional_env("COPY_ACK_MS") {
                Some(raw) => parse_copy_ack(&raw)?,
                None => DEFAULT_COPY_ACK_MS,
            },
            session_idle_ttl_secs: match optional_env("SESSION_IDLE_TTL_SECS") {
                Some(raw) => parse_secs("SESSION_IDLE_TTL_SECS", &raw)?,
                None => DEFAULT_SESSION_IDLE_TTL_SECS,
            },
            session_sweep_secs: match optional_env("SESSION_SWEEP_SECS") {
                Some(raw) => parse_secs("SESSION_SWEEP_SECS", &raw)?,
                None => DEFAULT_SESSION_SWEEP_SECS,
            },
        })
    }
}

/// Unset and blank variables both read as `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_copy_ack(raw: &str) -> Result<i64> {
    let ms = raw
        .trim()
        .parse::<i64>()
        .with_context(|| format!("COPY_ACK_MS must be a whole number of milliseconds, got '{raw}'"))?;
    anyhow::ensure!(ms > 0, "COPY_ACK_MS must be positive, got {ms}");
    Ok(ms)
}

fn parse_secs(key: &str, raw: &str) -> Result<u64> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number of seconds, got '{raw}'"))?;
    anyhow::ensure!(secs > 0, "{key} must be positive");
    Ok(secs)
}
