//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::debug;

use accounthub_core::error::AppError;

/// Handles password hashing and verification using Argon2id.
///
/// New hashes always use the current default parameters. Verification
/// reads algorithm, parameters, and salt out of the stored PHC string, so
/// hashes produced under older parameter sets keep verifying.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Never fails: a mismatch and a malformed stored hash both yield
    /// `false`, so callers on the authentication path branch on a boolean
    /// and nothing else. The comparison itself is the scheme's
    /// constant-time check, not byte equality.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, "Stored password hash is not a valid PHC string");
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
