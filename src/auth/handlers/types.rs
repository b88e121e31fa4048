/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. Success responses share the
 * `{status, token?, data?}` envelope; errors are produced by `AuthError`.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::{Role, User};

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
    /// Must match `password`
    pub password_confirm: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Forgot-password request
#[derive(Deserialize, Serialize, Debug)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Reset-password request (the token travels in the URL path)
#[derive(Deserialize, Serialize, Debug)]
pub struct ResetPasswordRequest {
    pub password: String,
    pub password_confirm: String,
}

/// Update-password request for logged-in users
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdatePasswordRequest {
    /// Current password, re-verified before the change
    pub current_password: String,
    pub password: String,
    pub password_confirm: String,
}

/// User response (without sensitive data)
///
/// Password hashes and reset-token fields are never serialized.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl UserResponse {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// `data` payload wrapping a single user
#[derive(Serialize, Deserialize, Debug)]
pub struct UserData {
    pub user: UserResponse,
}

/// Auth response
///
/// Returned by signup, login, reset-password, and update-password. Contains
/// the JWT token and the sanitized user.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub status: String,
    /// JWT token for authentication (30-day expiration)
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<UserData>,
}

impl AuthResponse {
    pub fn new(token: String, user: &User) -> Self {
        Self {
            status: "success".to_string(),
            token,
            data: Some(UserData {
                user: UserResponse::from_user(user),
            }),
        }
    }
}

/// Plain success acknowledgement (forgot-password)
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

/// Admin listing of all users
#[derive(Serialize, Deserialize, Debug)]
pub struct UserListResponse {
    pub status: String,
    pub results: usize,
    pub data: UsersData,
}

/// `data` payload wrapping the user collection
#[derive(Serialize, Deserialize, Debug)]
pub struct UsersData {
    pub users: Vec<UserResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: uuid::Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            role: Role::User,
            password_changed_at: None,
            password_reset_token: Some("deadbeef".to_string()),
            password_reset_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_user_response_omits_secrets() {
        let user = sample_user();
        let json = serde_json::to_string(&UserResponse::from_user(&user)).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("secret"));
        assert!(!json.contains("deadbeef"));
        assert!(json.contains("test@example.com"));
    }

    #[test]
    fn test_auth_response_envelope() {
        let user = sample_user();
        let response = AuthResponse::new("token123".to_string(), &user);
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["token"], "token123");
        assert_eq!(json["data"]["user"]["email"], "test@example.com");
        assert_eq!(json["data"]["user"]["role"], "user");
    }

    #[test]
    fn test_auth_response_skips_missing_data() {
        let response = AuthResponse {
            status: "success".to_string(),
            token: "token123".to_string(),
            data: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("data"));
    }
}
