/**
 * Admin Handlers
 *
 * Administrative endpoints over the user table. Routes here are layered
 * with `protect` and `restrict_to(&[Role::Admin])`.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{UserListResponse, UserResponse, UsersData};
use crate::auth::users::list_users;
use crate::error::AuthError;

/// List all users, sanitized, newest first
///
/// # Errors
///
/// * `401` / `403` - Handled by the middleware stack
/// * `503 Service Unavailable` - Database is not configured
pub async fn get_all_users(
    State(pool): State<Option<PgPool>>,
) -> Result<Json<UserListResponse>, AuthError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        AuthError::unavailable("Database not configured")
    })?;

    let users = list_users(&pool).await.map_err(|e| {
        tracing::error!("Database error: {:?}", e);
        AuthError::from(e)
    })?;

    let users: Vec<UserResponse> = users.iter().map(UserResponse::from_user).collect();

    Ok(Json(UserListResponse {
        status: "success".to_string(),
        results: users.len(),
        data: UsersData { users },
    }))
}
