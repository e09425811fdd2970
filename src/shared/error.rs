//! Shared Error Types
//!
//! This module defines the validation error used by request types and the
//! post model. It is raised for missing required fields and for values that
//! cannot be interpreted (an unknown category, an identifier that does not
//! parse).
//!
//! # Usage
//!
//! ```rust
//! use blogcore::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title and content are required");
//! assert_eq!(error.field(), "title");
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

/// Shared error types raised while interpreting client input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}

/// Return a required text field as supplied, or a validation error naming the
/// field when it is absent or blank.
pub fn require_text(
    field: &str,
    value: Option<&str>,
    message: &str,
) -> Result<String, SharedError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(SharedError::validation(field, message)),
    }
}
