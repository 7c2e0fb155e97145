//! The ordered access-control chain.
//!
//! Every protected operation runs a prefix of the same check sequence:
//!
//! 1. bearer token extracted from the request (transport layer)
//! 2. token decodes under the access key and carries a string subject
//! 3. the subject resolves to a stored user
//! 4. the user is active
//! 5. the user is a superuser (admin operations only)
//!
//! Failures in stages 2–3 are deliberately indistinguishable
//! (`Unauthenticated`), so authentication errors never reveal whether an
//! account exists. Deactivation is checked before role: an inactive
//! superuser fails at stage 4 and never reaches stage 5.

use std::sync::Arc;

use sqlx::postgres::PgConnection;

use accounthub_core::error::AppError;
use accounthub_core::result::AppResult;
use accounthub_database::repositories::UserRepository;
use accounthub_entity::user::User;

use crate::jwt::JwtDecoder;

/// Resolves bearer tokens to progressively stronger user guarantees.
#[derive(Debug, Clone)]
pub struct AccessChain {
    /// Token decoder.
    decoder: Arc<JwtDecoder>,
}

impl AccessChain {
    /// Creates a new access chain.
    pub fn new(decoder: Arc<JwtDecoder>) -> Self {
        Self { decoder }
    }

    /// Stages 2–3: decode the token and resolve its subject to a user.
    pub async fn current_user(&self, conn: &mut PgConnection, token: &str) -> AppResult<User> {
        let Some(email) = self.decoder.subject(token) else {
            return Err(AppError::unauthenticated("Could not validate credentials"));
        };

        UserRepository::find_by_email(conn, &email)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Could not validate credentials"))
    }

    /// Stages 2–4: an authenticated user whose account is active.
    pub async fn current_active_user(
        &self,
        conn: &mut PgConnection,
        token: &str,
    ) -> AppResult<User> {
        let user = self.current_user(conn, token).await?;
        if !user.is_active {
            return Err(AppError::forbidden_inactive("Inactive user"));
        }
        Ok(user)
    }

    /// Stages 2–5: an authenticated, active superuser.
    pub async fn current_active_superuser(
        &self,
        conn: &mut PgConnection,
        token: &str,
    ) -> AppResult<User> {
        let user = self.current_active_user(conn, token).await?;
        if !user.is_superuser {
            return Err(AppError::forbidden_privilege(
                "The user doesn't have enough privileges",
            ));
        }
        Ok(user)
    }
}
