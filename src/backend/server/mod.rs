//! Server Module
//!
//! This module contains the code that initializes and configures the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database loading and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig` (secret, database URL, port, TTL, cost)
//! 2. **Store Selection**: Postgres if reachable, in-memory otherwise
//! 3. **Router Creation**: Routes, authentication gate, tracing and CORS layers
//!
//! # Example
//!
//! ```rust,no_run
//! use blogcore::backend::server::create_app;
//! use blogcore::shared::ServerConfig;
//!
//! # async fn example() {
//! let config = ServerConfig::from_env().unwrap();
//! let app = create_app(&config).await;
//! # }
//! ```

/// Application state management
pub mod state;

/// Database loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::create_app;
