//! Config inspection and hot reload endpoints

use axum::extract::State;
use axum::response::Response;
use serde::Serialize;
use tracing::{info, warn};

use super::ServiceState;
use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::config::ConfigError;

/// GET /api/v1/config - Return the active transport configuration
pub async fn get_config(State(state): State<ServiceState>) -> Response {
    let config = state.current();
    ApiResponse::ok(config.as_ref())
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub reloaded: bool,
    pub path: String,
}

/// POST /api/v1/config/reload - Re-read the config file
///
/// A file that fails to parse or validate is rejected with 400 and the
/// previously active config keeps serving requests.
pub async fn reload_config(State(state): State<ServiceState>) -> Response {
    let path = state
        .config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    match state.reload() {
        Ok(Some(_)) => {
            info!(path = %path, "Transport config reloaded");
            ApiResponse::ok(ReloadResponse { reloaded: true, path })
        }
        Ok(None) => ApiErrorResponse::invalid_config(
            "No config file is associated with this service; start it with --config",
            Vec::new(),
        ),
        Err(ConfigError::Validation(errors)) => {
            warn!(path = %path, count = errors.len(), "Config reload rejected");
            ApiErrorResponse::invalid_config("Configuration validation failed", errors)
        }
        Err(e) => {
            warn!(path = %path, error = %e, "Config reload failed");
            ApiErrorResponse::invalid_config(e.to_string(), Vec::new())
        }
    }
}
