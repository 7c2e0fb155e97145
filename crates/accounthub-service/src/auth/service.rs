//! Registration and login.

use std::sync::Arc;

use sqlx::postgres::PgConnection;
use tracing::info;

use accounthub_auth::credentials::CredentialVerifier;
use accounthub_auth::jwt::JwtEncoder;
use accounthub_auth::password::PasswordHasher;
use accounthub_core::error::AppError;
use accounthub_core::result::AppResult;
use accounthub_database::repositories::UserRepository;
use accounthub_entity::user::{NewUser, User};

/// Handles open registration and credential-based login.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
    /// Credential verifier.
    verifier: Arc<CredentialVerifier>,
}

/// Data for registering a new account.
///
/// Open registration never sets privilege flags; accounts start active and
/// without superuser rights.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterAccount {
    /// Email address (unique).
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
    /// Display name (optional).
    pub full_name: Option<String>,
}

/// Tokens issued by a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedTokens {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        verifier: Arc<CredentialVerifier>,
    ) -> Self {
        Self {
            hasher,
            encoder,
            verifier,
        }
    }

    /// Registers a new account.
    pub async fn register(
        &self,
        conn: &mut PgConnection,
        req: RegisterAccount,
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
                is_active: true,
                is_superuser: false,
            },
        )
        .await?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Verifies credentials and issues a token pair.
    pub async fn login(
        &self,
        conn: &mut PgConnection,
        email: &str,
        password: &str,
    ) -> AppResult<IssuedTokens> {
        let user = self.verifier.authenticate(conn, email, password).await?;

        let tokens = IssuedTokens {
            access_token: self.encoder.access_token(&user.email)?,
            refresh_token: self.encoder.refresh_token(&user.email)?,
        };

        info!(user_id = user.id, "User logged in");
        Ok(tokens)
    }
}
