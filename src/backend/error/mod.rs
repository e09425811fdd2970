//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and status mapping
//! └── conversion.rs - IntoResponse and extractor-rejection conversions
//! ```
//!
//! # Propagation
//!
//! Every failure inside the authentication gate or the ownership check is
//! terminal for the request. Collaborator failures (`StoreError`,
//! `PasswordError`, `SigningError`) convert into `ApiError::Internal` at the
//! handler boundary via `?`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
