/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * loading the optional services, building the shared state, and configuring
 * the router.
 *
 * # Initialization Process
 *
 * 1. Load optional services (database pool, SMTP mailer)
 * 2. Create the shared `AppState`
 * 3. Create and configure the router
 *
 * # Error Handling
 *
 * Initialization is resilient: a missing database or mailer is logged and
 * the server starts degraded rather than refusing to boot.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::{load_base_url, load_database, load_mailer};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing gatehouse server");

    let db_pool = load_database().await;
    let mailer = load_mailer();
    let base_url = load_base_url();

    let app_state = AppState {
        db_pool,
        mailer,
        base_url,
    };

    tracing::info!("Router configured");

    create_router(app_state)
}
