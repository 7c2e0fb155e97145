//! Password recovery — token request and reset.
//!
//! The protocol keeps no server-side state: the signed reset token is the
//! only record that a recovery was requested. A token is not invalidated
//! after use; replay is bounded by the token's expiration window.

use std::sync::Arc;

use sqlx::postgres::PgConnection;
use tracing::info;

use accounthub_auth::jwt::{JwtDecoder, JwtEncoder};
use accounthub_auth::password::PasswordHasher;
use accounthub_core::error::AppError;
use accounthub_core::result::AppResult;
use accounthub_database::repositories::UserRepository;

/// Handles the password-reset token flow.
#[derive(Debug, Clone)]
pub struct PasswordRecoveryService {
    /// Token encoder (reset key).
    encoder: Arc<JwtEncoder>,
    /// Token decoder (reset key).
    decoder: Arc<JwtDecoder>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl PasswordRecoveryService {
    /// Creates a new recovery service.
    pub fn new(
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            encoder,
            decoder,
            hasher,
        }
    }

    /// Requests a password reset for the given email.
    ///
    /// Returns `None` for an unknown email. The transport layer answers
    /// with the same acknowledgment either way, so this endpoint does not
    /// reveal whether an account exists. Delivery is simulated: the token
    /// is emitted to the log in place of an email.
    pub async fn request(
        &self,
        conn: &mut PgConnection,
        email: &str,
    ) -> AppResult<Option<String>> {
        let Some(user) = UserRepository::find_by_email(conn, email).await? else {
            return Ok(None);
        };

        let token = self.encoder.password_reset_token(&user.email)?;

        info!(
            email = %user.email,
            token = %token,
            "Simulated password recovery email"
        );

        Ok(Some(token))
    }

    /// Resets a password using a recovery token.
    ///
    /// The confirmation is checked before anything else touches storage.
    /// An unresolvable subject is reported as `NotFound` — the one place
    /// where account non-existence is observable, kept as-is deliberately.
    pub async fn reset(
        &self,
        conn: &mut PgConnection,
        token: &str,
        new_password: &str,
        new_password_confirm: &str,
    ) -> AppResult<()> {
        if new_password != new_password_confirm {
            return Err(AppError::validation("Passwords do not match"));
        }

        let Some(email) = self.decoder.verify_password_reset(token) else {
            return Err(AppError::validation(
                "Invalid or expired password reset token",
            ));
        };

        let Some(user) = UserRepository::find_by_email(conn, &email).await? else {
            return Err(AppError::not_found(
                "User not found. The token may be invalid.",
            ));
        };

        if !user.is_active {
            return Err(AppError::forbidden_inactive("Inactive user"));
        }

        let password_hash = self.hasher.hash(new_password)?;
        UserRepository::update_password(conn, user.id, &password_hash).await?;

        info!(
            user_id = user.id,
            email = %user.email,
            "Password reset completed; simulated confirmation email"
        );

        Ok(())
    }
}
