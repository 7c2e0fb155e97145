//! Response DTOs.

use serde::{Deserialize, Serialize};

use accounthub_entity::user::User;

/// User representation returned by the API.
///
/// The password hash never appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// Display name.
    pub full_name: Option<String>,
    /// Active flag.
    pub is_active: bool,
    /// Superuser flag.
    pub is_superuser: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Short-lived access token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
