/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Require non-empty name, email and password; the password must fit
 *    in bcrypt's 72-byte input
 * 2. Hash the password with bcrypt on the blocking pool
 * 3. Insert the user; the store rejects a duplicate email atomically
 * 4. Return the public user record
 *
 * Registration does not issue a token; clients log in afterwards.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::auth::passwords::MAX_PASSWORD_BYTES;
use crate::backend::auth::users::NewUser;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::error::require_text;

/// Register handler
///
/// # Arguments
///
/// * `State(state)` - Application state (password hasher and user store)
/// * `payload` - Register request containing name, email and password
///
/// # Returns
///
/// `201 Created` with `{message, user}`
///
/// # Errors
///
/// * `400 Bad Request` - A field is missing, the password is longer than 72
///   bytes, or the email is already registered
/// * `500 Internal Server Error` - Hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "A", "email": "a@x.com", "password": "p1" }
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    const MESSAGE: &str = "Name, email and password are required";

    let Json(request) = payload?;
    let name = require_text("name", request.name.as_deref(), MESSAGE)?;
    let email = require_text("email", request.email.as_deref(), MESSAGE)?;
    let password = require_text("password", request.password.as_deref(), MESSAGE)?;
    if password.len() > MAX_PASSWORD_BYTES {
        tracing::warn!("Rejected over-long password for email: {}", email);
        return Err(ApiError::validation(
            "password",
            format!("Password must be at most {} bytes", MAX_PASSWORD_BYTES),
        ));
    }

    tracing::info!("Register request for email: {}", email);

    let password_hash = state.passwords.hash_blocking(password).await?;

    let user = state
        .users
        .create_user(NewUser {
            name,
            email,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::Conflict(detail) => {
                tracing::warn!("Registration conflict: {}", detail);
                ApiError::validation("email", "User already exists")
            }
            other => ApiError::from(other),
        })?;

    tracing::info!(user_id = %user.id, "User registered: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User Registered".to_string(),
            user: user.into(),
        }),
    ))
}
