//! Application state shared across all handlers.

use std::sync::Arc;

use accounthub_auth::access::AccessChain;
use accounthub_auth::jwt::{JwtDecoder, JwtEncoder};
use accounthub_auth::password::PasswordHasher;
use accounthub_core::config::AppConfig;
use accounthub_database::DatabasePool;
use accounthub_service::auth::{AuthService, PasswordRecoveryService};
use accounthub_service::user::{AdminUserService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; the only per-request
/// resource is the unit of work each handler begins on `db`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    /// PostgreSQL connection pool.
    pub db: DatabasePool,

    /// Password hasher (Argon2id).
    pub hasher: Arc<PasswordHasher>,
    /// Token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Token decoder.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Access-control chain.
    pub access_chain: Arc<AccessChain>,

    /// Registration and login service.
    pub auth_service: Arc<AuthService>,
    /// Password recovery service.
    pub recovery_service: Arc<PasswordRecoveryService>,
    /// Self-service user operations.
    pub user_service: Arc<UserService>,
    /// Admin user management.
    pub admin_service: Arc<AdminUserService>,
}
