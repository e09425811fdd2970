//! Blogcore - Blog Backend Library
//!
//! Blogcore is the backend of a small blog platform: users register and log
//! in, author posts, like posts and comment on them.
//!
//! # Overview
//!
//! The part of the system with a real contract is identity and resource
//! authorization:
//!
//! - Stateless, signed, time-bounded tokens issued at login
//! - An authentication gate that turns a bearer token into an `Identity`
//! - An ownership check applied before any edit or delete
//! - Atomic like and comment writes
//!
//! # Module Structure
//!
//! - **`shared`** - Post and comment types, validation errors, configuration
//! - **`backend`** - Axum server, handlers, authentication, persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! use blogcore::backend::server::create_app;
//! use blogcore::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
