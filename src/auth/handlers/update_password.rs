/**
 * Update Password Handler
 *
 * This module implements PATCH /api/auth/update-password for logged-in
 * users. Unlike the reset flow it requires the current password, so a
 * stolen token alone cannot rotate credentials.
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::signup::is_valid_password;
use crate::auth::handlers::types::{AuthResponse, UpdatePasswordRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::{get_user_by_id, update_password};
use crate::error::AuthError;
use crate::middleware::AuthUser;

/// Update password handler
///
/// # Errors
///
/// * `400 Bad Request` - Short password or mismatched confirmation
/// * `401 Unauthorized` - Current password is wrong
/// * `503 Service Unavailable` - Database is not configured
/// * `500 Internal Server Error` - Hashing, update, or token generation fails
pub async fn update_current_password(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth_user): AuthUser,
    Json(request): Json<UpdatePasswordRequest>,
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

    // Fetch the fresh row; the hash in extensions-land is never carried
    let user = get_user_by_id(&pool, auth_user.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            AuthError::from(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", auth_user.user_id);
            AuthError::unauthorized("The user belonging to this token no longer exists.")
        })?;

    let valid = verify(&request.current_password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        AuthError::internal("Server error")
    })?;

    if !valid {
        tracing::warn!("Wrong current password for user {}", user.id);
        return Err(AuthError::unauthorized("Your current password is wrong"));
    }

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

    // Old tokens are now invalid; hand back a fresh one
    let token = create_token(user.id, user.email.clone(), user.role).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        AuthError::internal("Server error")
    })?;

    tracing::info!("Password updated for user {}", user.id);

    Ok(Json(AuthResponse::new(token, &user)))
}
