//! Claim set embedded in every signed token.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `type` claim value carried by password-reset tokens.
pub const RESET_TOKEN_TYPE: &str = "password_reset";

/// The claim set signed into a token.
///
/// All three token classes (access, refresh, password-reset) share this
/// shape; they differ in signing key, lifetime, and the optional `type`
/// discriminator. The expiration is always an absolute UTC timestamp, so
/// verification never depends on issuance-time state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user's email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Expiration, in seconds since the Unix epoch. Stamped at issuance.
    #[serde(default)]
    pub exp: i64,
    /// Token class discriminator (`"password_reset"` for reset tokens).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Any further custom claims.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Claims for the given subject, with the expiration left to be
    /// stamped at issuance.
    pub fn subject(email: impl Into<String>) -> Self {
        Self {
            sub: Some(email.into()),
            exp: 0,
            token_type: None,
            extra: Map::new(),
        }
    }

    /// Add a custom claim.
    pub fn with_claim(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
