//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, fallback and layers
//! └── api_routes.rs   - Auth and post endpoints, public and gated
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use blogcore::backend::routes::create_router;
//! use blogcore::backend::server::state::AppState;
//! use blogcore::shared::ServerConfig;
//!
//! let config = ServerConfig::builder().jwt_secret("secret").build().unwrap();
//! let router = create_router(AppState::in_memory(&config));
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
