//! API route definitions
//!
//! - POST /api/v1/decide - Transport mode decision and option listing
//! - GET /api/v1/config - Active configuration
//! - POST /api/v1/config/reload - Hot reload from the config file
//! - GET /health - Liveness

use axum::{routing::{get, post}, Router};

use super::handlers::{self, ServiceState};

/// Versioned API routes, nested under `/api/v1`
pub fn api_routes(state: ServiceState) -> Router {
    Router::new()
        .route("/decide", post(handlers::decide))
        .route("/config", get(handlers::get_config))
        .route("/config/reload", post(handlers::reload_config))
        .with_state(state)
}

/// Root-level routes
pub fn root_routes() -> Router {
    Router::new().route("/health", get(handlers::health_check))
}
