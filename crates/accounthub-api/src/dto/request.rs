//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use accounthub_entity::user::FieldPatch;

/// Open registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    pub full_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Self-service profile update. Absent fields stay unchanged; `full_name`
/// may be cleared with an explicit `null`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// New password.
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: Option<String>,
    /// New display name, or `null` to clear it.
    #[serde(default, skip_serializing_if = "FieldPatch::is_keep")]
    pub full_name: FieldPatch<String>,
}

/// Password change request with confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
    /// Confirmation, must match `new_password`.
    pub new_password_confirm: String,
}

/// Password recovery request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordRecoveryRequest {
    /// Email of the account to recover.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// Password reset request body, carrying the recovery token.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordResetRequest {
    /// Recovery token.
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
    /// New password.
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
    /// Confirmation, must match `new_password`.
    pub new_password_confirm: String,
}

/// Create user request (admin). Privilege flags may be set here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminCreateUserRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    pub full_name: Option<String>,
    /// Initial active flag.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Initial superuser flag.
    #[serde(default)]
    pub is_superuser: bool,
}

/// Update user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminUpdateUserRequest {
    /// New email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// New password.
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: Option<String>,
    /// New display name, or `null` to clear it.
    #[serde(default, skip_serializing_if = "FieldPatch::is_keep")]
    pub full_name: FieldPatch<String>,
    /// New active flag.
    pub is_active: Option<bool>,
    /// New superuser flag.
    pub is_superuser: Option<bool>,
}

fn default_true() -> bool {
    true
}
