/**
 * User Model and Database Operations
 *
 * This module defines the user row, the role enum used for route access
 * control, and the sqlx queries the handlers run against PostgreSQL.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User roles for route access control.
///
/// Stored as TEXT in the `users` table. New accounts always start as `User`;
/// admins are promoted out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

// Roles travel over the wire as plain TEXT; delegate to the string impls so
// the column type stays an ordinary TEXT/VARCHAR.
impl sqlx::Type<sqlx::Postgres> for Role {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Role {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Role::from_str(s).ok_or_else(|| format!("unknown role: {s}").into())
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for Role {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Role used by `restrict_to`
    pub role: Role,
    /// Set whenever the password changes; tokens issued before it are rejected
    pub password_changed_at: Option<DateTime<Utc>>,
    /// SHA-256 hex of the outstanding reset token, if any
    pub password_reset_token: Option<String>,
    /// Expiry of the outstanding reset token
    pub password_reset_expires_at: Option<DateTime<Utc>>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the password was changed after a token was issued.
    ///
    /// `issued_at` is the JWT `iat` claim in Unix seconds. Comparison is
    /// strictly-after at second granularity, so a token minted in the same
    /// second as the change stays valid.
    pub fn changed_password_after(&self, issued_at: u64) -> bool {
        match self.password_changed_at {
            Some(changed_at) => changed_at.timestamp() > issued_at as i64,
            None => false,
        }
    }
}

/// Create a new user with the default `user` role.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &PgPool,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, email, password_hash, role, password_changed_at, password_reset_token, password_reset_expires_at, created_at, updated_at
        "#
    )
    .bind(id)
    .bind(&email)
    .bind(&password_hash)
    .bind(Role::User)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, role, password_changed_at, password_reset_token, password_reset_expires_at, created_at, updated_at
        FROM users
        WHERE email = $1
        "#
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: uuid::Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, role, password_changed_at, password_reset_token, password_reset_expires_at, created_at, updated_at
        FROM users
        WHERE id = $1
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// List all users, newest first. Admin-only surface.
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, role, password_changed_at, password_reset_token, password_reset_expires_at, created_at, updated_at
        FROM users
        ORDER BY created_at DESC
        "#
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Replace a user's password hash and stamp `password_changed_at`.
///
/// Tokens issued before this call stop validating in `protect`.
pub async fn update_password(
    pool: &PgPool,
    user_id: uuid::Uuid,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET password_hash = $1, password_changed_at = $2, updated_at = $2
        WHERE id = $3
        RETURNING id, email, password_hash, role, password_changed_at, password_reset_token, password_reset_expires_at, created_at, updated_at
        "#
    )
    .bind(&password_hash)
    .bind(now)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Store the hash and expiry of a freshly issued reset token.
pub async fn set_reset_token(
    pool: &PgPool,
    user_id: uuid::Uuid,
    token_hash: String,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET password_reset_token = $1, password_reset_expires_at = $2, updated_at = $3
        WHERE id = $4
        "#,
    )
    .bind(&token_hash)
    .bind(expires_at)
    .bind(Utc::now())
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Clear any outstanding reset token.
///
/// Used after a successful reset and when the reset email cannot be sent.
pub async fn clear_reset_token(pool: &PgPool, user_id: uuid::Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET password_reset_token = NULL, password_reset_expires_at = NULL, updated_at = $1
        WHERE id = $2
        "#,
    )
    .bind(Utc::now())
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Find the user holding an unexpired reset token.
///
/// `token_hash` is the SHA-256 hex of the raw token from the reset link; the
/// raw token itself is never stored.
pub async fn find_user_by_reset_token(
    pool: &PgPool,
    token_hash: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, role, password_changed_at, password_reset_token, password_reset_expires_at, created_at, updated_at
        FROM users
        WHERE password_reset_token = $1
          AND password_reset_expires_at > $2
        "#
    )
    .bind(token_hash)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_user(password_changed_at: Option<DateTime<Utc>>) -> User {
        let now = Utc::now();
        User {
            id: uuid::Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
            password_changed_at,
            password_reset_token: None,
            password_reset_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_role_string_conversion() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Admin.as_str(), "admin");

        assert_eq!(Role::from_str("user"), Some(Role::User));
        assert_eq!(Role::from_str("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::from_str("superuser"), None);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, r#""admin""#);

        let role: Role = serde_json::from_str(r#""user""#).unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_changed_password_after_no_change() {
        let user = test_user(None);
        assert!(!user.changed_password_after(0));
    }

    #[test]
    fn test_changed_password_after_old_token() {
        let changed = Utc::now();
        let user = test_user(Some(changed));
        let issued_before = (changed - Duration::hours(1)).timestamp() as u64;
        assert!(user.changed_password_after(issued_before));
    }

    #[test]
    fn test_changed_password_after_fresh_token() {
        let changed = Utc::now();
        let user = test_user(Some(changed));
        let issued_after = (changed + Duration::hours(1)).timestamp() as u64;
        assert!(!user.changed_password_after(issued_after));
    }

    #[test]
    fn test_same_second_token_stays_valid() {
        let changed = Utc::now();
        let user = test_user(Some(changed));
        assert!(!user.changed_password_after(changed.timestamp() as u64));
    }
}
