/**
 * Server Configuration
 *
 * This module loads the optional backing services from environment
 * variables: the PostgreSQL pool and the SMTP mailer.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * Services that fail to initialize are set to `None` and the server
 * continues without them.
 */

use sqlx::PgPool;
use std::sync::Arc;

use crate::email::SmtpMailer;

/// Database configuration result
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs the embedded migrations
///
/// # Returns
///
/// - `Some(PgPool)` if database is successfully configured
/// - `None` if `DATABASE_URL` is not set or connection fails
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

/// Load and initialize the SMTP mailer
///
/// Reads `SMTP_HOST`, `SMTP_USERNAME`, `SMTP_PASSWORD`, and `MAIL_FROM`.
/// Returns `None` if any are missing or the transport cannot be built;
/// forgot-password then reports email as unavailable.
pub fn load_mailer() -> Option<Arc<SmtpMailer>> {
    let vars = (
        std::env::var("SMTP_HOST"),
        std::env::var("SMTP_USERNAME"),
        std::env::var("SMTP_PASSWORD"),
        std::env::var("MAIL_FROM"),
    );
    let (Ok(host), Ok(username), Ok(password), Ok(from)) = vars else {
        tracing::warn!("SMTP not fully configured. Email features will be disabled.");
        return None;
    };

    match SmtpMailer::new(&host, &username, &password, &from) {
        Ok(mailer) => {
            tracing::info!("SMTP mailer configured for relay {}", host);
            Some(Arc::new(mailer))
        }
        Err(e) => {
            tracing::error!("Failed to initialize SMTP mailer: {:?}", e);
            tracing::warn!("Email features will be disabled.");
            None
        }
    }
}

/// Public base URL for links in outbound email.
///
/// Falls back to localhost so reset links are still usable in development.
pub fn load_base_url() -> String {
    std::env::var("APP_BASE_URL").unwrap_or_else(|_| {
        tracing::warn!("APP_BASE_URL not set, defaulting to http://localhost:3000");
        "http://localhost:3000".to_string()
    })
}
