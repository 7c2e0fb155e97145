//! User self-service operations — profile updates, password changes,
//! account deletion.

use std::sync::Arc;

use sqlx::postgres::PgConnection;
use tracing::info;

use accounthub_auth::password::PasswordHasher;
use accounthub_core::error::AppError;
use accounthub_core::result::AppResult;
use accounthub_database::repositories::UserRepository;
use accounthub_entity::user::{FieldPatch, User, UserPatch};

/// Handles user self-service operations.
///
/// Every method takes the already-authenticated, active user resolved by
/// the access chain; none of them can touch privilege flags.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

/// Partial update of the caller's own profile.
///
/// Absent means unchanged; the display name may also be cleared
/// explicitly. Privilege flags are not part of this structure at all.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateProfile {
    /// New email address.
    pub email: Option<String>,
    /// New plaintext password, hashed before storage.
    pub password: Option<String>,
    /// New display name, or an explicit clear.
    #[serde(default, skip_serializing_if = "FieldPatch::is_keep")]
    pub full_name: FieldPatch<String>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(hasher: Arc<PasswordHasher>) -> Self {
        Self { hasher }
    }

    /// Updates the current user's profile fields.
    pub async fn update_me(
        &self,
        conn: &mut PgConnection,
        current: &User,
        update: UpdateProfile,
    ) -> AppResult<User> {
        if let Some(email) = &update.email {
            if email != &current.email {
                if let Some(existing) = UserRepository::find_by_email(conn, email).await? {
                    if existing.id != current.id {
                        return Err(AppError::conflict(
                            "Email already registered by another user",
                        ));
                    }
                }
            }
        }

        let password_hash = match update.password {
            Some(password) => Some(self.hasher.hash(&password)?),
            None => None,
        };

        let patch = UserPatch {
            email: update.email,
            password_hash,
            full_name: update.full_name,
            is_active: None,
            is_superuser: None,
        };

        let mut user = current.clone();
        patch.apply(&mut user);
        let user = UserRepository::update(conn, &user).await?;

        info!(user_id = user.id, "Profile updated");
        Ok(user)
    }

    /// Changes the current user's password.
    ///
    /// The current password is verified first; only then is the new
    /// password checked against the stored hash, since that check means
    /// nothing unless the caller already knows the current password.
    pub async fn change_password(
        &self,
        conn: &mut PgConnection,
        current: &User,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        if !self.hasher.verify(current_password, &current.password_hash) {
            return Err(AppError::validation("Incorrect current password"));
        }

        if self.hasher.verify(new_password, &current.password_hash) {
            return Err(AppError::validation(
                "New password cannot be the same as the current password",
            ));
        }

        let password_hash = self.hasher.hash(new_password)?;
        UserRepository::update_password(conn, current.id, &password_hash).await?;

        info!(user_id = current.id, "Password changed");
        Ok(())
    }

    /// Deletes the current user's account.
    pub async fn delete_me(&self, conn: &mut PgConnection, current: &User) -> AppResult<()> {
        if !UserRepository::delete(conn, current.id).await? {
            return Err(AppError::not_found(format!(
                "User {} not found",
                current.id
            )));
        }

        info!(user_id = current.id, "Account deleted by owner");
        Ok(())
    }
}
