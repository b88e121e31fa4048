/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * API route table with the health probe, request tracing, and the fallback
 * handler.
 */

use axum::{response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::error::AuthError;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the optional services
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    // Add API routes
    let router = router.merge(configure_api_routes(&app_state));

    // Request tracing for everything above
    let router = router.layer(TraceLayer::new_for_http());

    // Fallback handler for 404, in the standard error envelope
    let router = router.fallback(|| async { AuthError::not_found("Route not found") });

    // Use AppState as router state
    router.with_state(app_state)
}
