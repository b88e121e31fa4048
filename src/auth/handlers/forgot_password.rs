/**
 * Forgot Password Handler
 *
 * This module implements POST /api/auth/forgot-password.
 *
 * # Flow
 *
 * 1. Look up the user by email (404 if unknown)
 * 2. Generate a random reset token
 * 3. Store the token's SHA-256 hash with a 10-minute expiry
 * 4. Email the raw token as a reset link
 *
 * If the email cannot be sent, the stored token is cleared again so a stale
 * hash never lingers, and the handler answers 500.
 *
 * # Security
 *
 * - Only the token hash touches the database; the raw token exists in the
 *   email alone
 * - The reset link is never logged
 */

use axum::{extract::State, response::Json};
use chrono::{Duration, Utc};

use crate::auth::handlers::types::{ForgotPasswordRequest, MessageResponse};
use crate::auth::reset::{hash_reset_token, new_reset_token, RESET_TOKEN_TTL_MINUTES};
use crate::auth::users::{clear_reset_token, get_user_by_email, set_reset_token};
use crate::error::AuthError;
use crate::server::state::AppState;

/// Forgot password handler
///
/// # Errors
///
/// * `400 Bad Request` - Email missing
/// * `404 Not Found` - No user with that email
/// * `503 Service Unavailable` - Database is not configured
/// * `500 Internal Server Error` - Email not configured or send failure
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        AuthError::unavailable("Database not configured")
    })?;

    if request.email.is_empty() {
        return Err(AuthError::validation("Please provide an email address"));
    }

    // Resolve the mailer before minting a token so a missing SMTP setup
    // doesn't leave reset hashes behind.
    let mailer = state.mailer.as_ref().ok_or_else(|| {
        tracing::error!("SMTP not configured, cannot send reset email");
        AuthError::internal("There was an error sending the email. Try again later.")
    })?;

    let user = get_user_by_email(pool, &request.email)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            AuthError::from(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("Password reset requested for unknown email");
            AuthError::not_found("There is no user with that email address")
        })?;

    // Generate and store the token
    let token = new_reset_token();
    let token_hash = hash_reset_token(&token);
    let expires_at = Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES);

    set_reset_token(pool, user.id, token_hash, expires_at)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store reset token: {:?}", e);
            AuthError::from(e)
        })?;

    let reset_link = format!("{}/api/auth/reset-password/{}", state.base_url, token);

    if let Err(e) = mailer.send_password_reset(&user.email, &reset_link).await {
        tracing::error!("Reset email send failed: {:?}", e);
        // Do not leave a token the user never received
        if let Err(e) = clear_reset_token(pool, user.id).await {
            tracing::error!("Failed to clear reset token after send failure: {:?}", e);
        }
        return Err(AuthError::internal(
            "There was an error sending the email. Try again later.",
        ));
    }

    tracing::info!("Password reset email sent to user {}", user.id);

    Ok(Json(MessageResponse::success("Token sent to email")))
}
