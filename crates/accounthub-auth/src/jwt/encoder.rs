//! Token issuance with configurable signing and TTL.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use accounthub_core::config::AuthConfig;
use accounthub_core::error::AppError;

use super::claims::{Claims, RESET_TOKEN_TYPE};
use super::parse_algorithm;

/// Creates signed tokens for all three token classes.
///
/// Access and refresh tokens share the primary signing key; password-reset
/// tokens use the independent reset key, so neither class can stand in for
/// the other.
#[derive(Clone)]
pub struct JwtEncoder {
    /// Header naming the configured algorithm.
    header: Header,
    /// Signing key for access and refresh tokens.
    access_key: EncodingKey,
    /// Signing key for password-reset tokens.
    reset_key: EncodingKey,
    /// Access token lifetime.
    access_ttl: Duration,
    /// Refresh token lifetime.
    refresh_ttl: Duration,
    /// Password-reset token lifetime.
    reset_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("header", &self.header)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let algorithm = parse_algorithm(&config.algorithm)?;
        Ok(Self {
            header: Header::new(algorithm),
            access_key: EncodingKey::from_secret(config.secret_key.as_bytes()),
            reset_key: EncodingKey::from_secret(config.reset_secret_key.as_bytes()),
            access_ttl: Duration::minutes(config.access_token_ttl_minutes as i64),
            refresh_ttl: Duration::days(config.refresh_token_ttl_days as i64),
            reset_ttl: Duration::hours(config.reset_token_ttl_hours as i64),
        })
    }

    /// Signs the given claims with the primary key, stamping
    /// `exp = now + lifetime` as an absolute UTC timestamp.
    pub fn issue(&self, claims: Claims, lifetime: Duration) -> Result<String, AppError> {
        self.sign(claims, &self.access_key, lifetime)
    }

    /// Issues an access token for the given subject.
    pub fn access_token(&self, email: &str) -> Result<String, AppError> {
        self.issue(Claims::subject(email), self.access_ttl)
    }

    /// Issues a refresh token for the given subject.
    pub fn refresh_token(&self, email: &str) -> Result<String, AppError> {
        self.issue(Claims::subject(email), self.refresh_ttl)
    }

    /// Issues a password-reset token for the given subject.
    ///
    /// Reset tokens carry `type = "password_reset"` and are signed with the
    /// reset key.
    pub fn password_reset_token(&self, email: &str) -> Result<String, AppError> {
        let mut claims = Claims::subject(email);
        claims.token_type = Some(RESET_TOKEN_TYPE.to_string());
        self.sign(claims, &self.reset_key, self.reset_ttl)
    }

    fn sign(
        &self,
        mut claims: Claims,
        key: &EncodingKey,
        lifetime: Duration,
    ) -> Result<String, AppError> {
        claims.exp = (Utc::now() + lifetime).timestamp();
        encode(&self.header, &claims, key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
