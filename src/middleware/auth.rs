/**
 * Authentication Middleware
 *
 * This module provides the middleware guarding protected routes. `protect`
 * extracts and verifies the JWT from the Authorization header and attaches
 * the authenticated user to the request; `restrict_to` runs after it and
 * checks the user's role.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::auth::users::{get_user_by_id, Role};
use crate::error::AuthError;
use crate::server::state::AppState;

/// Authenticated user data extracted from the JWT and, when a database is
/// available, refreshed from the current user row.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT from the `Authorization: Bearer <token>` header
/// 2. Verifies the token signature and expiry
/// 3. Checks the user still exists and has not changed their password since
///    the token was issued (when a database pool is available)
/// 4. Attaches `AuthenticatedUser` to request extensions for handlers
///
/// Returns 401 Unauthorized if any step fails.
pub async fn protect(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    // Get Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AuthError::unauthorized("You are not logged in. Please log in to get access.")
        })?;

    // Extract token (format: "Bearer <token>")
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        AuthError::unauthorized("Invalid authorization header. Use: Bearer <token>")
    })?;

    // Verify token
    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        AuthError::unauthorized("Invalid or expired token. Please log in again.")
    })?;

    // Parse user ID from claims
    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::error!("Invalid user ID in token: {:?}", e);
        AuthError::internal("Malformed token subject")
    })?;

    let mut auth_user = AuthenticatedUser {
        user_id,
        email: claims.email,
        role: claims.role,
    };

    // With a database, require that the user still exists and reject tokens
    // issued before the last password change. Without one, the signed claims
    // are all we have.
    if let Some(pool) = &app_state.db_pool {
        let user = get_user_by_id(pool, user_id)
            .await
            .map_err(|e| {
                tracing::error!("Database error in protect: {:?}", e);
                AuthError::from(e)
            })?
            .ok_or_else(|| {
                tracing::warn!("User from token no longer exists: {}", user_id);
                AuthError::unauthorized("The user belonging to this token no longer exists.")
            })?;

        if user.changed_password_after(claims.iat) {
            tracing::warn!("Token predates password change for user {}", user_id);
            return Err(AuthError::unauthorized(
                "Password was changed recently. Please log in again.",
            ));
        }

        auth_user.email = user.email;
        auth_user.role = user.role;
    }

    // Attach authenticated user to request extensions
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Role-restriction middleware, layered inside `protect`.
///
/// Rejects with 403 when the authenticated user's role is not in `allowed`.
/// Missing `AuthenticatedUser` means the route was not layered with
/// `protect`; that is answered with 401 rather than a panic.
pub async fn restrict_to(
    allowed: &'static [Role],
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| {
            tracing::warn!("restrict_to reached without an authenticated user");
            AuthError::unauthorized("You are not logged in. Please log in to get access.")
        })?;

    if !allowed.contains(&user.role) {
        tracing::warn!(
            "User {} with role {} denied (requires one of {:?})",
            user.user_id,
            user.role.as_str(),
            allowed
        );
        return Err(AuthError::forbidden(
            "You do not have permission to perform this action.",
        ));
    }

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Use as a handler parameter on routes layered with `protect` to get the
/// user attached by the middleware.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AuthError::unauthorized("You are not logged in. Please log in to get access.")
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    #[test]
    fn test_extensions_roundtrip() {
        let mut request = HttpRequest::new(Body::empty());
        assert!(request.extensions().get::<AuthenticatedUser>().is_none());

        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            role: Role::Admin,
        };
        request.extensions_mut().insert(user.clone());

        let extracted = request.extensions().get::<AuthenticatedUser>();
        assert!(extracted.is_some());
        assert_eq!(extracted.unwrap().user_id, user.user_id);
    }

    #[test]
    fn test_role_membership() {
        const ADMIN_ONLY: &[Role] = &[Role::Admin];
        assert!(ADMIN_ONLY.contains(&Role::Admin));
        assert!(!ADMIN_ONLY.contains(&Role::User));
    }
}
