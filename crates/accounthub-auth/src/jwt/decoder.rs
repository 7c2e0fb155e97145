//! Fail-closed token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use tracing::debug;

use accounthub_core::config::AuthConfig;
use accounthub_core::error::AppError;

use super::claims::{Claims, RESET_TOKEN_TYPE};
use super::parse_algorithm;

/// Validates tokens of both signing classes.
///
/// Every decoding path fails closed: a malformed token, a bad signature,
/// an expired `exp`, or a wrong algorithm all yield `None`. Callers branch
/// only on presence.
#[derive(Clone)]
pub struct JwtDecoder {
    /// Verification key for access and refresh tokens.
    access_key: DecodingKey,
    /// Verification key for password-reset tokens.
    reset_key: DecodingKey,
    /// Validation configuration shared by both classes.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = parse_algorithm(&config.algorithm)?;
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Ok(Self {
            access_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            reset_key: DecodingKey::from_secret(config.reset_secret_key.as_bytes()),
            validation,
        })
    }

    /// Decodes and validates a token of the access/refresh class.
    pub fn decode(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.access_key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                debug!(error = %e, "Rejected token");
                None
            }
        }
    }

    /// Decodes a token and extracts its string subject.
    pub fn subject(&self, token: &str) -> Option<String> {
        self.decode(token)?.sub
    }

    /// Verifies a password-reset token and returns its subject.
    ///
    /// A token only passes when it validates under the reset key, carries
    /// `type = "password_reset"`, and has a string subject. An access token
    /// never passes here, and a reset token never passes [`Self::decode`];
    /// the two classes are signed with independent keys.
    pub fn verify_password_reset(&self, token: &str) -> Option<String> {
        let claims = match decode::<Claims>(token, &self.reset_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                debug!(error = %e, "Rejected password-reset token");
                return None;
            }
        };

        if claims.token_type.as_deref() != Some(RESET_TOKEN_TYPE) {
            debug!("Password-reset token has wrong type claim");
            return None;
        }
        claims.sub
    }
}
