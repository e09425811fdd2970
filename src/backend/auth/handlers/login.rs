/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Require email and password
 * 2. Look up the user by exact email
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a signed token for the user's ID
 *
 * An unknown email and a wrong password produce the same response, so the
 * endpoint does not reveal which accounts exist.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::error::require_text;

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state (token service, hasher, user store)
/// * `payload` - Login request containing email and password
///
/// # Returns
///
/// `200 OK` with `{token, user}`
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, unknown email or wrong password
/// * `500 Internal Server Error` - Store, hashing or signing failure
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "name": "A",
///     "email": "a@x.com"
///   }
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    const MESSAGE: &str = "Email and password are required";

    let Json(request) = payload?;
    let email = require_text("email", request.email.as_deref(), MESSAGE)?;
    let password = require_text("password", request.password.as_deref(), MESSAGE)?;

    tracing::info!("Login request for: {}", email);

    let user = state
        .users
        .find_user_by_email(&email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", email);
            ApiError::InvalidCredentials
        })?;

    let valid = state
        .passwords
        .verify_blocking(password, user.password_hash.clone())
        .await?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id)?;

    tracing::info!(user_id = %user.id, "User logged in: {}", user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
