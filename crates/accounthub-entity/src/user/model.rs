//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier, assigned by the database on insert and
    /// immutable afterwards.
    pub id: i64,
    /// Email address, the login identifier. Unique, compared exactly as
    /// stored.
    pub email: String,
    /// Argon2 password hash. Never serialized into any outward-facing
    /// representation.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Human-readable display name.
    pub full_name: Option<String>,
    /// Whether the account may authenticate.
    pub is_active: bool,
    /// Whether the account holds administrative privileges.
    pub is_superuser: bool,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Email address (unique).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Display name (optional).
    pub full_name: Option<String>,
    /// Initial active flag.
    pub is_active: bool,
    /// Initial superuser flag.
    pub is_superuser: bool,
}
