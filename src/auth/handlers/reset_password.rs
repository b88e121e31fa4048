/**
 * Reset Password Handler
 *
 * This module implements PATCH /api/auth/reset-password/{token}.
 *
 * # Flow
 *
 * 1. Hash the raw token from the path
 * 2. Find the user whose stored hash matches and whose expiry is in the
 *    future (one query; anything else is "invalid or expired")
 * 3. Validate and hash the new password
 * 4. Store it, clear the token fields, stamp `password_changed_at`
 * 5. Return a fresh JWT so the user is logged in immediately
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::signup::is_valid_password;
use crate::auth::handlers::types::{AuthResponse, ResetPasswordRequest};
use crate::auth::reset::hash_reset_token;
use crate::auth::sessions::create_token;
use crate::auth::users::{clear_reset_token, find_user_by_reset_token, update_password};
use crate::error::AuthError;

/// Reset password handler
///
/// # Errors
///
/// * `400 Bad Request` - Token invalid or expired, short password, or
///   mismatched confirmation
/// * `503 Service Unavailable` - Database is not configured
/// * `500 Internal Server Error` - Hashing, update, or token generation fails
pub async fn reset_password(
    State(pool): State<Option<PgPool>>,
    Path(token): Path<String>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        AuthError::unavailable("Database not configured")
    })?;

    if !is_valid_password(&request.password) {
        return Err(AuthError::validation(
            "Password must be at least 8 characters",
        ));
    }

    if request.password != request.password_confirm {
        return Err(AuthError::validation("Passwords do not match"));
    }

    // Look up by token hash; expiry is part of the predicate
    let token_hash = hash_reset_token(&token);
    let user = find_user_by_reset_token(&pool, &token_hash)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            AuthError::from(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("Reset attempted with invalid or expired token");
            AuthError::validation("Token is invalid or has expired")
        })?;

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        AuthError::internal("Server error")
    })?;

    let user = update_password(&pool, user.id, password_hash)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update password: {:?}", e);
            AuthError::from(e)
        })?;

    clear_reset_token(&pool, user.id).await.map_err(|e| {
        tracing::error!("Failed to clear reset token: {:?}", e);
        AuthError::from(e)
    })?;

    // Log the user in with a token minted after the password change
    let token = create_token(user.id, user.email.clone(), user.role).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        AuthError::internal("Server error")
    })?;

    tracing::info!("Password reset completed for user {}", user.id);

    Ok(Json(AuthResponse::new(token, &user)))
}
