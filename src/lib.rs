//! Gatehouse - Authentication Service
//!
//! Gatehouse is a standalone authentication and session service built on
//! Axum. It owns user accounts and nothing else: signup, login, JWT session
//! issuance, password reset over email, and role-based route access control.
//!
//! # Module Structure
//!
//! The crate is organized into focused modules:
//!
//! - **`auth`** - User accounts, JWT sessions, reset tokens, HTTP handlers
//! - **`middleware`** - `protect` (bearer-token verification) and
//!   `restrict_to` (role check)
//! - **`email`** - Outbound SMTP (password-reset links)
//! - **`error`** - The shared error type and its HTTP conversion
//! - **`routes`** - Route table and router assembly
//! - **`server`** - Application state, configuration, initialization
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the PostgreSQL pool and the SMTP
//! mailer. Both are optional services: without a database the API answers
//! 503, without SMTP the reset flow reports email as unavailable. This keeps
//! development and tests free of infrastructure requirements.
//!
//! # Error Handling
//!
//! All handlers return `Result<_, AuthError>`; the error converts into a
//! JSON body `{"status": "fail" | "error", "message": ...}` with the
//! matching HTTP status code.

/// User accounts, sessions, and auth handlers
pub mod auth;

/// Request middleware (bearer-token and role guards)
pub mod middleware;

/// Outbound email
pub mod email;

/// Error types and HTTP conversion
pub mod error;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

// Re-export commonly used types
pub use error::AuthError;
pub use server::{create_app, AppState};
