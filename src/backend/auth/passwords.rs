/**
 * Password Hashing
 *
 * Credential store adapter: salted bcrypt hashing and verification. A
 * mismatch is a normal `Ok(false)`; only a malformed stored hash or a failed
 * worker task is an error.
 *
 * bcrypt only reads the first 72 bytes of its input. Longer passwords are
 * refused when hashing and never match when verifying, so two passwords that
 * share a 72-byte prefix are not interchangeable.
 *
 * Hashing is CPU-bound, so the async variants move the work onto Tokio's
 * blocking pool instead of stalling the request executor.
 */

use thiserror::Error;

/// Longest password bcrypt can hash without truncation
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Errors from the password hasher
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt rejected the input or the stored hash
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// The blocking worker panicked or was cancelled
    #[error("password worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// bcrypt password hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Work factor used for new hashes
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt
    ///
    /// Fails for passwords longer than `MAX_PASSWORD_BYTES`.
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        Ok(bcrypt::non_truncating_hash(plaintext, self.cost)?)
    }

    /// Check a plaintext password against a stored hash
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }
        Ok(bcrypt::non_truncating_verify(plaintext, hash)?)
    }

    /// `hash` on the blocking pool
    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, PasswordError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext)).await?
    }

    /// `verify` on the blocking pool
    pub async fn verify_blocking(
        &self,
        plaintext: String,
        hash: String,
    ) -> Result<bool, PasswordError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hash)).await?
    }
}
