/**
 * Error Conversion
 *
 * Converts `AuthError` into an HTTP response so handlers can return it
 * directly with `?`.
 *
 * # Response Format
 *
 * Errors are returned as JSON:
 * ```json
 * {
 *   "status": "fail",
 *   "message": "Incorrect email or password"
 * }
 * ```
 *
 * `status` is `"fail"` for client errors (4xx) and `"error"` for server
 * errors (5xx).
 */

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::AuthError;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let label = if status.is_client_error() {
            "fail"
        } else {
            "error"
        };

        let body = serde_json::json!({
            "status": label,
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_client_errors_are_fail() {
        let response = AuthError::unauthorized("Invalid token").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_server_errors_are_error() {
        let response = AuthError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
