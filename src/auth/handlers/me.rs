/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * the currently authenticated user. The route is layered with `protect`,
 * so the handler receives the verified user via the `AuthUser` extractor.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{UserData, UserResponse};
use crate::auth::users::get_user_by_id;
use crate::error::AuthError;
use crate::middleware::AuthUser;

/// Response envelope for the current user
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct MeResponse {
    pub status: String,
    pub data: UserData,
}

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - No authenticated user (handled by `protect`)
/// * `404 Not Found` - User row no longer exists
/// * `503 Service Unavailable` - Database is not configured
pub async fn get_me(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth_user): AuthUser,
) -> Result<Json<MeResponse>, AuthError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        AuthError::unavailable("Database not configured")
    })?;

    let user = get_user_by_id(&pool, auth_user.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            AuthError::from(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", auth_user.user_id);
            AuthError::not_found("User not found")
        })?;

    Ok(Json(MeResponse {
        status: "success".to_string(),
        data: UserData {
            user: UserResponse::from_user(&user),
        },
    }))
}
