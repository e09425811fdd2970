/**
 * Session Tokens
 *
 * This module issues and verifies the signed, time-limited JWTs that prove a
 * prior successful login. Tokens are HS256-signed with a secret supplied once
 * at startup; verification never consults the database.
 *
 * # Expiry
 *
 * A token is valid while the verifying clock reads strictly before `exp`.
 * No leeway is applied and clock skew is not compensated.
 */

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Why a token was not accepted
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer token was supplied
    #[error("No token provided")]
    TokenMissing,
    /// The token's expiry has passed
    #[error("Token has expired")]
    TokenExpired,
    /// Bad signature, malformed token, or unusable claims
    #[error("Invalid token")]
    TokenInvalid,
}

/// A verified claim about who is making a request.
///
/// Only `TokenService::verify` produces one; it lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: Uuid,
    issued_at: u64,
    expires_at: u64,
}

impl Identity {
    pub(crate) fn new(user_id: Uuid, issued_at: u64, expires_at: u64) -> Self {
        Self {
            user_id,
            issued_at,
            expires_at,
        }
    }

    /// Subject of the token
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Issue time (Unix seconds)
    pub fn issued_at(&self) -> u64 {
        self.issued_at
    }

    /// Expiry time (Unix seconds)
    pub fn expires_at(&self) -> u64 {
        self.expires_at
    }
}

/// Failure to produce a token (signing misconfigured)
#[derive(Debug, Error)]
#[error("failed to sign token: {0}")]
pub struct SigningError(#[from] jsonwebtoken::errors::Error);

/// Issues and verifies identity tokens with a process-wide secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

/// Current wall-clock time in Unix seconds
pub fn unix_now() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}

impl TokenService {
    /// Create a token service for the given secret and token lifetime
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify_at` so the boundary is exact.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Lifetime of issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `user_id`, valid for the configured lifetime
    pub fn issue(&self, user_id: Uuid) -> Result<String, SigningError> {
        self.issue_at(user_id, unix_now())
    }

    /// Issue a token as if the current time were `issued_at`
    pub fn issue_at(&self, user_id: Uuid, issued_at: u64) -> Result<String, SigningError> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at,
            exp: issued_at.saturating_add(self.ttl.as_secs()),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Verify a token against the current wall-clock time
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        self.verify_at(token, unix_now())
    }

    /// Verify a token as if the current time were `now`
    ///
    /// # Errors
    ///
    /// * `TokenMissing` - The token is empty
    /// * `TokenInvalid` - Signature mismatch, malformed token, or a subject
    ///   that is not a user ID
    /// * `TokenExpired` - `now` is at or past the embedded expiry
    pub fn verify_at(&self, token: &str, now: u64) -> Result<Identity, AuthError> {
        if token.is_empty() {
            return Err(AuthError::TokenMissing);
        }

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            }
        })?;
        let claims = data.claims;

        if now >= claims.exp {
            return Err(AuthError::TokenExpired);
        }

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::TokenInvalid)?;

        Ok(Identity::new(user_id, claims.iat, claims.exp))
    }
}
