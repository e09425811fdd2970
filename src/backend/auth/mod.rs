//! Authentication Module
//!
//! This module handles user registration, login and token management.
//!
//! # Architecture
//!
//! - **`users`** - Credential record model
//! - **`passwords`** - bcrypt hashing and verification
//! - **`sessions`** - Token service: issue and verify signed identity tokens
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → password hashed → user stored
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Me**: token → verified by the gate → user info returned
//!
//! Tokens are stateless: verification checks the signature and expiry only
//! and never consults the user store.

/// Credential record model
pub mod users;

/// Password hashing
pub mod passwords;

/// Token issuance and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use passwords::PasswordHasher;
pub use sessions::{AuthError, Identity, TokenService};
