//! User repository implementation.
//!
//! Every method takes the connection of the caller's [`crate::UnitOfWork`]
//! explicitly, so all operations within a request share one transaction.

use sqlx::postgres::PgConnection;

use accounthub_core::error::{AppError, ErrorKind};
use accounthub_core::result::AppResult;
use accounthub_entity::user::{NewUser, User};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository;

impl UserRepository {
    /// Find a user by primary key.
    pub async fn find_by_id(conn: &mut PgConnection, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email. Emails are compared exactly as stored.
    pub async fn find_by_email(conn: &mut PgConnection, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// List users newest first, with offset/limit pagination.
    pub async fn list(conn: &mut PgConnection, offset: i64, limit: i64) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id DESC LIMIT $1 OFFSET $2")
            .bind(limit)
            .bind(offset)
            .fetch_all(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Insert a new user. The database assigns the identity.
    pub async fn insert(conn: &mut PgConnection, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash, full_name, is_active, is_superuser) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.full_name)
        .bind(data.is_active)
        .bind(data.is_superuser)
        .fetch_one(conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("A user with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert user", e),
        })
    }

    /// Persist every updatable column of an existing user row.
    pub async fn update(conn: &mut PgConnection, user: &User) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET email = $2, password_hash = $3, full_name = $4, \
                              is_active = $5, is_superuser = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(user.is_active)
        .bind(user.is_superuser)
        .fetch_optional(conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("A user with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update user", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", user.id)))
    }

    /// Overwrite a user's password hash.
    pub async fn update_password(
        conn: &mut PgConnection,
        user_id: i64,
        password_hash: &str,
    ) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(user_id)
            .bind(password_hash)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update password", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }
        Ok(())
    }

    /// Delete a user by id. Returns whether a row was removed.
    pub async fn delete(conn: &mut PgConnection, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}
