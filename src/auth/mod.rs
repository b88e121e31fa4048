//! Authentication Module
//!
//! This module handles user accounts, credentials, and session tokens. It
//! provides the HTTP handlers for the auth endpoints and the building blocks
//! the middleware uses to verify requests.
//!
//! # Module Structure
//!
//! ```
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model, roles, and database operations
//! ├── sessions.rs     - JWT token management
//! ├── reset.rs        - Password-reset token generation and hashing
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password → user created → JWT returned
//! 2. **Login**: credentials verified → JWT returned
//! 3. **Protected requests**: bearer JWT verified by `protect`, user row
//!    re-checked, role enforced by `restrict_to` where layered
//! 4. **Forgot/reset**: emailed token (hash stored, 10-minute expiry) →
//!    new password → fresh JWT
//! 5. **Update password**: current password re-verified → new password →
//!    fresh JWT
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication and expire after
//!   30 days
//! - Tokens issued before a password change are rejected
//! - Reset tokens are stored only as SHA-256 hashes

/// User model, roles, and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Password-reset token generation and hashing
pub mod reset;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{
    forgot_password, get_all_users, get_me, login, reset_password, signup,
    update_current_password,
};
pub use users::{Role, User};
