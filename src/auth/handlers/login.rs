/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Check both fields are present
 * 2. Look up the user by email
 * 3. Verify the password using bcrypt
 * 4. Generate a JWT token and return it with the sanitized user
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 message
 *   (no account enumeration)
 * - Password verification uses constant-time comparison (via bcrypt)
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::AuthError;

const BAD_CREDENTIALS: &str = "Incorrect email or password";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Email or password missing
/// * `401 Unauthorized` - Unknown user or wrong password
/// * `503 Service Unavailable` - Database is not configured
/// * `500 Internal Server Error` - Database query or token generation fails
pub async fn login(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        AuthError::unavailable("Database not configured")
    })?;
    tracing::info!("Login request for: {}", request.email);

    if request.email.is_empty() || request.password.is_empty() {
        return Err(AuthError::validation("Please provide email and password"));
    }

    let user = get_user_by_email(&pool, &request.email)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            AuthError::from(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            AuthError::unauthorized(BAD_CREDENTIALS)
        })?;

    // Verify password
    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        AuthError::internal("Server error")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(AuthError::unauthorized(BAD_CREDENTIALS));
    }

    // Create token
    let token = create_token(user.id, user.email.clone(), user.role).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        AuthError::internal("Server error")
    })?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(AuthResponse::new(token, &user)))
}
