//! REST API module using Axum
//!
//! Exposes the transport selector over HTTP:
//! - `/api/v1` decision, config inspection and hot reload
//! - `/health` liveness at the root
//!
//! All `/api/v1` responses use the envelope in [`envelope`].

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::ServiceState;

use axum::http::{header, Method, Uri};
use axum::response::Response;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use envelope::ApiErrorResponse;

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `ORGAN_ROUTE_CORS_ORIGINS` to a comma-separated list of allowed
/// origins for browser clients served elsewhere.
fn build_cors_layer() -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match std::env::var("ORGAN_ROUTE_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            base.allow_origin(allowed)
        }
        Err(_) => base,
    }
}

async fn not_found(uri: Uri) -> Response {
    ApiErrorResponse::not_found(format!("No route for {}", uri.path()))
}

/// Create the complete application router.
pub fn create_app(state: ServiceState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes(state))
        .merge(routes::root_routes())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer()),
        )
}
