/**
 * Auth Error Types
 *
 * This module defines the error type used across the HTTP handlers and
 * middleware. Every failure a handler can produce is represented here and
 * converted to an HTTP response in `conversion.rs`.
 *
 * # Error Categories
 *
 * - Validation failures (missing or malformed input) map to 400
 * - Authentication failures (bad credentials, bad tokens) map to 401
 * - Authorization failures (insufficient role) map to 403
 * - Missing resources map to 404
 * - Everything else (database, hashing, email, token minting) maps to 500
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by the authentication handlers and middleware.
///
/// Variants carry a human-readable message; the HTTP status code is derived
/// in `status_code()`. Database errors convert via `From` so handlers can use
/// the `?` operator on sqlx calls.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid request input (missing fields, bad formats, mismatched
    /// password confirmation, expired reset tokens).
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Authentication failure (bad credentials, missing/invalid bearer token,
    /// token issued before a password change).
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Authenticated but not allowed (role not in the permitted set).
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Referenced resource does not exist.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// A required backing service is not configured (database, SMTP).
    #[error("Service unavailable: {message}")]
    Unavailable { message: String },

    /// Internal failure that should not leak details to the client.
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Unavailable` - 503 Service Unavailable
    /// - `Internal` / `Database` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message for the response body.
    ///
    /// Database errors are collapsed to a generic message; the detail is
    /// logged server-side where the error is raised.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Unavailable { message }
            | Self::Internal { message } => message.clone(),
            Self::Database(_) => "Internal server error".to_string(),
        }
    }
}
