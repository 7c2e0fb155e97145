//! Admin user management — listing, creation, updates, deletion.

use std::sync::Arc;

use sqlx::postgres::PgConnection;
use tracing::info;

use accounthub_auth::password::PasswordHasher;
use accounthub_core::error::AppError;
use accounthub_core::result::AppResult;
use accounthub_database::repositories::UserRepository;
use accounthub_entity::user::{FieldPatch, NewUser, User, UserPatch};

/// Handles administrative user management operations.
///
/// Callers are superusers resolved through the full access chain; the
/// acting user is passed in for audit logging and the self-delete guard.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

/// Request to create a new user (admin).
///
/// Unlike open registration, an administrator may set both privilege
/// flags.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateAccount {
    /// Email address (unique).
    pub email: String,
    /// Initial plaintext password, hashed before storage.
    pub password: String,
    /// Display name (optional).
    pub full_name: Option<String>,
    /// Initial active flag.
    pub is_active: bool,
    /// Initial superuser flag.
    pub is_superuser: bool,
}

/// Partial update of any user (admin).
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AdminUpdateAccount {
    /// New email address.
    pub email: Option<String>,
    /// New plaintext password, hashed before storage.
    pub password: Option<String>,
    /// New display name, or an explicit clear.
    #[serde(default, skip_serializing_if = "FieldPatch::is_keep")]
    pub full_name: FieldPatch<String>,
    /// New active flag.
    pub is_active: Option<bool>,
    /// New superuser flag.
    pub is_superuser: Option<bool>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(hasher: Arc<PasswordHasher>) -> Self {
        Self { hasher }
    }

    /// Lists users with offset/limit pagination.
    pub async fn list(
        &self,
        conn: &mut PgConnection,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<User>> {
        UserRepository::list(conn, offset, limit).await
    }

    /// Gets a single user by id.
    pub async fn get(&self, conn: &mut PgConnection, user_id: i64) -> AppResult<User> {
        UserRepository::find_by_id(conn, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("The user with this id was not found"))
    }

    /// Creates a new user.
    pub async fn create(
        &self,
        conn: &mut PgConnection,
        acting: &User,
        req: CreateAccount,
    ) -> AppResult<User> {
        if UserRepository::find_by_email(conn, &req.email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "A user with this email already exists",
            ));
        }

        let password_hash = self.hasher.hash(&req.password)?;
        let user = UserRepository::insert(
            conn,
            &NewUser {
                email: req.email,
                password_hash,
                full_name: req.full_name,
                is_active: req.is_active,
                is_superuser: req.is_superuser,
            },
        )
        .await?;

        info!(
            admin_id = acting.id,
            new_user_id = user.id,
            is_superuser = user.is_superuser,
            "User created by admin"
        );

        Ok(user)
    }

    /// Updates a user's fields, privilege flags included.
    pub async fn update(
        &self,
        conn: &mut PgConnection,
        acting: &User,
        user_id: i64,
        update: AdminUpdateAccount,
    ) -> AppResult<User> {
        let current = self.get(conn, user_id).await?;

        if let Some(email) = &update.email {
            if email != &current.email {
                if let Some(existing) = UserRepository::find_by_email(conn, email).await? {
                    if existing.id != user_id {
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
            is_active: update.is_active,
            is_superuser: update.is_superuser,
        };

        let mut user = current;
        patch.apply(&mut user);
        let user = UserRepository::update(conn, &user).await?;

        info!(admin_id = acting.id, target_id = user_id, "User updated by admin");
        Ok(user)
    }

    /// Deletes a user, returning the removed representation.
    ///
    /// Administrators cannot delete their own account through this path;
    /// self-deletion goes through the self-service operation.
    pub async fn delete(
        &self,
        conn: &mut PgConnection,
        acting: &User,
        user_id: i64,
    ) -> AppResult<User> {
        if acting.id == user_id {
            return Err(AppError::self_operation_forbidden(
                "Superusers cannot delete their own account through this endpoint",
            ));
        }

        let user = UserRepository::find_by_id(conn, user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("The user with this id was not found for deletion")
            })?;

        if !UserRepository::delete(conn, user_id).await? {
            return Err(AppError::not_found(
                "The user with this id was not found for deletion",
            ));
        }

        info!(admin_id = acting.id, target_id = user_id, "User deleted");
        Ok(user)
    }
}
