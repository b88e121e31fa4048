/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Check the password confirmation matches
 * 3. Check if a user with this email already exists
 * 4. Hash the password using bcrypt
 * 5. Create the user (always with the `user` role)
 * 6. Generate a JWT token and return it with the sanitized user
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - The role is never taken from the request body
 * - Passwords are never returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::AuthError;

/// Minimal email sanity check; real validation happens at delivery time.
pub(crate) fn is_valid_email(email: &str) -> bool {
    email.contains('@') && !email.starts_with('@') && !email.ends_with('@')
}

/// Passwords must be at least 8 characters long.
pub(crate) fn is_valid_password(password: &str) -> bool {
    password.len() >= 8
}

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid email, short password, or mismatched confirmation
/// * `400 Bad Request` - A user with this email already exists
/// * `503 Service Unavailable` - Database is not configured
/// * `500 Internal Server Error` - Hashing, user creation, or token generation fails
pub async fn signup(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        AuthError::unavailable("Database not configured")
    })?;
    tracing::info!("Signup request for email: {}", request.email);

    if !is_valid_email(&request.email) {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(AuthError::validation("Invalid email format"));
    }

    if !is_valid_password(&request.password) {
        tracing::warn!("Password too short");
        return Err(AuthError::validation(
            "Password must be at least 8 characters",
        ));
    }

    if request.password != request.password_confirm {
        tracing::warn!("Password confirmation mismatch");
        return Err(AuthError::validation("Passwords do not match"));
    }

    // Check if email already exists
    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(AuthError::validation("Email already registered"));
    }

    // Hash password
    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        AuthError::internal("Server error")
    })?;

    // Create user
    let user = create_user(&pool, request.email.clone(), password_hash)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user: {:?}", e);
            AuthError::internal("Failed to create user")
        })?;

    // Create token
    let token = create_token(user.id, user.email.clone(), user.role).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        AuthError::internal("Server error")
    })?;

    tracing::info!("User created successfully: {}", user.email);

    Ok(Json(AuthResponse::new(token, &user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a@b"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@leading.com"));
        assert!(!is_valid_email("trailing@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password_length() {
        assert!(is_valid_password("12345678"));
        assert!(is_valid_password("a-much-longer-password"));
        assert!(!is_valid_password("short"));
        assert!(!is_valid_password(""));
    }
}
