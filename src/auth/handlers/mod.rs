//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```
//! handlers/
//! ├── mod.rs              - Module exports and documentation
//! ├── types.rs            - Request and response types
//! ├── signup.rs           - User registration handler
//! ├── login.rs            - User authentication handler
//! ├── me.rs               - Get current user handler
//! ├── forgot_password.rs  - Reset-token issuance handler
//! ├── reset_password.rs   - Token-based password reset handler
//! ├── update_password.rs  - Authenticated password change handler
//! └── admin.rs            - Admin-only user listing
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup
//! - **`login`** - POST /api/auth/login
//! - **`get_me`** - GET /api/auth/me
//! - **`forgot_password`** - POST /api/auth/forgot-password
//! - **`reset_password`** - PATCH /api/auth/reset-password/{token}
//! - **`update_current_password`** - PATCH /api/auth/update-password
//! - **`get_all_users`** - GET /api/admin/users

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// Forgot password handler
pub mod forgot_password;

/// Reset password handler
pub mod reset_password;

/// Update password handler
pub mod update_password;

/// Admin handlers
pub mod admin;

// Re-export commonly used types
pub use types::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, ResetPasswordRequest,
    SignupRequest, UpdatePasswordRequest, UserListResponse, UserResponse,
};

// Re-export handlers
pub use admin::get_all_users;
pub use forgot_password::forgot_password;
pub use login::login;
pub use me::get_me;
pub use reset_password::reset_password;
pub use signup::signup;
pub use update_password::update_current_password;
