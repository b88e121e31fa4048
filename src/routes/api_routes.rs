/**
 * API Route Handlers
 *
 * This module defines the route table for the auth API, split into three
 * tiers by the middleware they pass through:
 *
 * - Public: signup, login, forgot-password, reset-password
 * - Protected (`protect`): me, update-password
 * - Admin (`protect` + `restrict_to(admin)`): user listing
 */

use axum::{
    extract::Request,
    middleware::{self, Next},
    routing::{get, patch, post},
    Router,
};

use crate::auth::{
    forgot_password, get_all_users, get_me, login, reset_password, signup,
    update_current_password,
};
use crate::auth::users::Role;
use crate::middleware::auth::{protect, restrict_to};
use crate::server::state::AppState;

const ADMIN_ROLES: &[Role] = &[Role::Admin];

/// Configure API routes
///
/// ## Public
/// - `POST /api/auth/signup` - User registration
/// - `POST /api/auth/login` - User login
/// - `POST /api/auth/forgot-password` - Issue a reset token by email
/// - `PATCH /api/auth/reset-password/{token}` - Reset with an emailed token
///
/// ## Protected (bearer token)
/// - `GET /api/auth/me` - Current user info
/// - `PATCH /api/auth/update-password` - Change password while logged in
///
/// ## Admin (bearer token + admin role)
/// - `GET /api/admin/users` - List all users
pub fn configure_api_routes(app_state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/forgot-password", post(forgot_password))
        .route("/api/auth/reset-password/{token}", patch(reset_password));

    let protected = Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/auth/update-password", patch(update_current_password))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), protect));

    // Layer order matters: protect is added last so it runs first and
    // restrict_to sees the authenticated user.
    let admin = Router::new()
        .route("/api/admin/users", get(get_all_users))
        .route_layer(middleware::from_fn(|request: Request, next: Next| {
            restrict_to(ADMIN_ROLES, request, next)
        }))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), protect));

    Router::new().merge(public).merge(protected).merge(admin)
}
