use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::refine::{RefineError, RefineTarget};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Mode mismatch: {0}")]
    ModeMismatch(String),

    #[error("Refinement of '{0}' is already in progress")]
    RefinementInProgress(RefineTarget),

    #[error("Refinement of '{target}' failed: {source}")]
    Refinement {
        target: RefineTarget,
        #[source]
        source: RefineError,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ModeMismatch(msg) => (StatusCode::CONFLICT, "MODE_MISMATCH", msg.clone()),
            AppError::RefinementInProgress(target) => (
                StatusCode::CONFLICT,
                "REFINEMENT_IN_PROGRESS",
                format!("A refinement of '{target}' is already running"),
            ),
            AppError::Refinement { target, source } => {
                tracing::error!("Refinement of {target} failed: {source}");
                let (status, code) = match source {
                    RefineError::MissingCredential => {
                        (StatusCode::SERVICE_UNAVAILABLE, "MISSING_CREDENTIAL")
                    }
                    RefineError::ServiceFailure(_) => (StatusCode::BAD_GATEWAY, "REFINEMENT_FAILED"),
                };
                (status, code, target.failure_notice().to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
