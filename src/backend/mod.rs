//! Backend Module
//!
//! This module contains all server-side code for the blog backend: an Axum
//! HTTP server with stateless token authentication and owner-only mutation
//! of posts.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization and application state
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, token service, register/login/me handlers
//! - **`middleware`** - Authentication gate and identity extractors
//! - **`posts`** - Ownership check, owned mutation sequence, post handlers
//! - **`store`** - Persistence traits with Postgres and in-memory implementations
//! - **`error`** - Handler error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - `blog-server` binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── posts/          - Posts, likes and comments
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the token service (signing secret injected at startup),
//! the password hasher and the two stores. Nothing else is shared between
//! requests; like and comment writes are atomic inside the store.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. Each variant maps to one status
//! code; internal failures are logged and replaced with a generic message.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Posts, likes and comments
pub mod posts;

/// Persistence
pub mod store;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppState};
