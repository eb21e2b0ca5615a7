//! API Router
//!
//! Central routing configuration. The service is stateless: the router is
//! built once at startup and serves until shutdown.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::fulfillment;

/// Create the main application router.
#[must_use]
pub fn create_router() -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Agent platform fulfillment webhook
        .route("/webhook", post(fulfillment::handlers::webhook))
        // Middleware
        .layer(TraceLayer::new_for_http())
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
    /// Crate version
    version: &'static str,
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
