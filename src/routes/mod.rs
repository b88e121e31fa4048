//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint route table
//! ```
//!
//! # Route Organization
//!
//! 1. **Health** - `GET /health` liveness probe
//! 2. **API Routes** - auth endpoints in three middleware tiers
//! 3. **Fallback Handler** - 404 in the standard error envelope

/// Main router creation
pub mod router;

/// API endpoint route table
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
