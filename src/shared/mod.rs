//! Shared Types Module
//!
//! This module contains types used across the backend layers: the post and
//! comment model returned by the HTTP API, the validation error raised for
//! bad client input, and the server configuration.
//!
//! All types derive `Serialize`/`Deserialize` where they cross the HTTP
//! boundary, so handlers and stores exchange exactly the JSON shapes clients
//! see.

/// Post, comment and category types
pub mod post;

/// Shared error types
pub mod error;

/// Server configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use post::{
    AuthorSummary, Category, Comment, NewComment, NewPost, Post, PostChanges, PublishedPost,
};
pub use error::SharedError;
pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
