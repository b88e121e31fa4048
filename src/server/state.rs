/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` trait so handlers can extract just the database pool.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The database connection pool (optional service)
 * - The SMTP mailer (optional service)
 * - The public base URL used to build password-reset links
 *
 * # Optional Services
 *
 * Both backing services are `Option`s: the server starts without them and
 * the affected handlers answer 503/500 instead. This keeps local development
 * and the integration tests free of infrastructure requirements.
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::email::SmtpMailer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, `None` when `DATABASE_URL` is not set
    pub db_pool: Option<PgPool>,
    /// SMTP mailer, `None` when SMTP is not configured
    pub mailer: Option<Arc<SmtpMailer>>,
    /// Public base URL for links in outbound email
    pub base_url: String,
}

impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}
