/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /auth/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * The route sits behind the authentication gate; the handler receives the
 * verified identity and loads the matching credential record.
 */

use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::store::UserStore;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing, expired or invalid token
/// * `404 Not Found` - The account no longer exists
/// * `500 Internal Server Error` - Store failure
pub async fn get_me(
    AuthUser(identity): AuthUser,
    State(users): State<Arc<dyn UserStore>>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = users
        .find_user_by_id(identity.user_id())
        .await?
        .ok_or_else(|| {
            tracing::warn!(user_id = %identity.user_id(), "Token subject has no account");
            ApiError::not_found("User")
        })?;

    Ok(Json(user.into()))
}
