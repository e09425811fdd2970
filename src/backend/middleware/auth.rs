/**
 * Authentication Middleware
 *
 * This module provides the authentication gate for routes that require an
 * identity. It extracts the bearer token from the `Authorization` header,
 * verifies it with the token service, and attaches the resulting `Identity`
 * to the request extensions.
 *
 * The gate trusts the token's signature as proof of a prior login; it never
 * consults the user store.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::backend::auth::sessions::{AuthError, Identity, TokenService};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Extract the bearer token from the `Authorization` header.
///
/// A missing header, a non-UTF-8 value, a scheme other than `Bearer`, or an
/// empty token all count as no token at all.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::TokenMissing)
}

/// Run the gate over a set of request headers
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<Identity, AuthError> {
    let token = bearer_token(headers)?;
    tokens.verify(token)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT from the `Authorization: Bearer <token>` header
/// 2. Verifies the token
/// 3. Attaches the `Identity` to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the token is missing, expired or invalid.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = authenticate(request.headers(), &tokens).map_err(|e| {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request: {}",
            e
        );
        e
    })?;

    tracing::debug!(user_id = %identity.user_id(), "Authenticated request");
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Axum extractor for the identity attached by `auth_middleware`
///
/// Only valid on routes behind the middleware; elsewhere it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Identity);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("Identity not found in request extensions");
                ApiError::from(AuthError::TokenMissing)
            })?;

        Ok(AuthUser(identity))
    }
}

/// Gate variant for open routes
///
/// No bearer token (including a header with another scheme) means an
/// anonymous caller. A bearer token that fails verification is an error.
pub fn authenticate_optional(
    headers: &HeaderMap,
    tokens: &TokenService,
) -> Result<Option<Identity>, AuthError> {
    match bearer_token(headers) {
        Ok(token) => tokens.verify(token).map(Some),
        Err(AuthError::TokenMissing) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Axum extractor for routes open to anonymous callers
///
/// Without a bearer token the caller is anonymous (`None`). A bearer token
/// that is expired or invalid is rejected rather than silently downgraded to
/// anonymous.
#[derive(Clone, Debug)]
pub struct OptionalAuthUser(pub Option<Identity>);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = authenticate_optional(&parts.headers, &state.tokens).map_err(|e| {
            tracing::warn!("Rejected optional credentials: {}", e);
            ApiError::from(e)
        })?;

        Ok(OptionalAuthUser(identity))
    }
}
