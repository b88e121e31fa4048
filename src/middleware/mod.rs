//! Middleware Module
//!
//! HTTP middleware for the server. Requests to protected routes pass through
//! `protect` (bearer-token verification) and, on admin routes, `restrict_to`
//! (role check) before reaching handlers.

pub mod auth;

pub use auth::{protect, restrict_to, AuthUser, AuthenticatedUser};
