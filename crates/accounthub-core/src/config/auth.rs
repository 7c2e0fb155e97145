//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// Access and refresh tokens are signed with `secret_key`; password-reset
/// tokens are signed with the independent `reset_secret_key` so the two
/// token classes can never be substituted for one another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access and refresh token signing.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    /// Secret key for password-reset token signing (distinct from
    /// `secret_key`).
    #[serde(default = "default_reset_secret_key")]
    pub reset_secret_key: String,
    /// HMAC signing algorithm identifier (`"HS256"`, `"HS384"`, `"HS512"`).
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl_days: u64,
    /// Password-reset token TTL in hours.
    #[serde(default = "default_reset_ttl")]
    pub reset_token_ttl_hours: u64,
    /// Email of the superuser account seeded on first startup.
    #[serde(default = "default_first_superuser_email")]
    pub first_superuser_email: String,
    /// Password of the superuser account seeded on first startup.
    #[serde(default = "default_first_superuser_password")]
    pub first_superuser_password: String,
}

fn default_secret_key() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_reset_secret_key() -> String {
    "CHANGE_ME_TOO_IN_PRODUCTION".to_string()
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_ttl() -> u64 {
    30
}

fn default_refresh_ttl() -> u64 {
    7
}

fn default_reset_ttl() -> u64 {
    1
}

fn default_first_superuser_email() -> String {
    "admin@example.com".to_string()
}

fn default_first_superuser_password() -> String {
    "changethis".to_string()
}
