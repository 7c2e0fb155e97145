//! Email/password verification against stored accounts.

use std::sync::Arc;

use sqlx::postgres::PgConnection;

use accounthub_core::error::AppError;
use accounthub_core::result::AppResult;
use accounthub_database::repositories::UserRepository;
use accounthub_entity::user::User;

use crate::password::PasswordHasher;

/// Verifies login credentials for session issuance.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl CredentialVerifier {
    /// Creates a new credential verifier.
    pub fn new(hasher: Arc<PasswordHasher>) -> Self {
        Self { hasher }
    }

    /// Authenticates an email/password pair.
    ///
    /// An unknown email and a wrong password surface identically as
    /// `Unauthenticated`. A deactivated account with correct credentials
    /// is the one distinct outcome (`ForbiddenInactive`); login reports it
    /// separately from bad credentials.
    pub async fn authenticate(
        &self,
        conn: &mut PgConnection,
        email: &str,
        password: &str,
    ) -> AppResult<User> {
        let user = UserRepository::find_by_email(conn, email).await?;

        let Some(user) = user else {
            return Err(AppError::unauthenticated("Incorrect email or password"));
        };

        if !self.hasher.verify(password, &user.password_hash) {
            return Err(AppError::unauthenticated("Incorrect email or password"));
        }

        if !user.is_active {
            return Err(AppError::forbidden_inactive("Inactive user"));
        }

        Ok(user)
    }
}
