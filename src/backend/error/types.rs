/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler. Each
 * variant maps to exactly one status code.
 *
 * # Error Categories
 *
 * ## Authentication (401)
 *
 * - Missing bearer token
 * - Expired token
 * - Invalid signature or malformed token
 *
 * ## Authorization (403)
 *
 * - Authenticated identity does not own the resource
 *
 * ## Client Errors (400, 404)
 *
 * - Missing required fields, malformed identifiers, unknown category
 * - Bad login credentials
 * - Resource not found
 *
 * ## Internal Errors (500)
 *
 * - Persistence failures, token signing failures, hashing failures. The
 *   detail is logged server-side and replaced with a generic message in the
 *   response.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::passwords::PasswordError;
use crate::backend::auth::sessions::{AuthError, SigningError};
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Message returned to clients for any internal failure
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use blogcore::backend::error::ApiError;
///
/// let err = ApiError::not_found("Post");
/// assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
///
/// let err = ApiError::validation("title", "Title and content are required");
/// assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The authentication gate rejected the request
    #[error(transparent)]
    Unauthenticated(#[from] AuthError),

    /// The authenticated identity does not own the resource
    #[error("Not authorized")]
    Forbidden,

    /// The target resource does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Kind of resource (e.g. "Post")
        resource: &'static str,
    },

    /// Missing required input or malformed identifier
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Login with an unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Unexpected collaborator failure
    ///
    /// `detail` is for server logs only and never reaches the client.
    #[error("Internal error: {detail}")]
    Internal {
        /// Diagnostic detail
        detail: String,
    },
}

impl ApiError {
    /// Create a not-found error for the given resource kind
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(SharedError::validation(field, message))
    }

    /// Create an internal error
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Unauthenticated` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Validation`, `InvalidCredentials` - 400 Bad Request
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message shown to the client
    pub fn message(&self) -> String {
        match self {
            Self::Internal { .. } => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<SigningError> for ApiError {
    fn from(err: SigningError) -> Self {
        Self::internal(err.to_string())
    }
}
