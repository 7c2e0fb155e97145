//! Application bootstrap — wires configuration, database, auth primitives,
//! and services into a running server.

use std::sync::Arc;

use tracing::info;

use accounthub_auth::access::AccessChain;
use accounthub_auth::credentials::CredentialVerifier;
use accounthub_auth::jwt::{JwtDecoder, JwtEncoder};
use accounthub_auth::password::PasswordHasher;
use accounthub_core::config::AppConfig;
use accounthub_core::error::AppError;
use accounthub_core::result::AppResult;
use accounthub_database::repositories::UserRepository;
use accounthub_database::{DatabasePool, migration};
use accounthub_entity::user::NewUser;
use accounthub_service::auth::{AuthService, PasswordRecoveryService};
use accounthub_service::user::{AdminUserService, UserService};

use crate::router::build_router;
use crate::state::AppState;

/// Construct the application state from configuration and a connected
/// pool.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppResult<AppState> {
    let config = Arc::new(config);

    let hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth)?);
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth)?);
    let access_chain = Arc::new(AccessChain::new(Arc::clone(&jwt_decoder)));

    let verifier = Arc::new(CredentialVerifier::new(Arc::clone(&hasher)));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&hasher),
        Arc::clone(&jwt_encoder),
        verifier,
    ));
    let recovery_service = Arc::new(PasswordRecoveryService::new(
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        Arc::clone(&hasher),
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&hasher)));
    let admin_service = Arc::new(AdminUserService::new(Arc::clone(&hasher)));

    Ok(AppState {
        config,
        db,
        hasher,
        jwt_encoder,
        jwt_decoder,
        access_chain,
        auth_service,
        recovery_service,
        user_service,
        admin_service,
    })
}

/// Seed the first superuser account if it does not exist yet.
pub async fn seed_first_superuser(state: &AppState) -> AppResult<()> {
    let auth = &state.config.auth;

    let mut uow = state.db.begin().await?;
    if UserRepository::find_by_email(uow.conn(), &auth.first_superuser_email)
        .await?
        .is_none()
    {
        let password_hash = state.hasher.hash(&auth.first_superuser_password)?;
        UserRepository::insert(
            uow.conn(),
            &NewUser {
                email: auth.first_superuser_email.clone(),
                password_hash,
                full_name: None,
                is_active: true,
                is_superuser: true,
            },
        )
        .await?;
        info!(email = %auth.first_superuser_email, "Seeded first superuser");
    }
    uow.commit().await?;

    Ok(())
}

/// Run the AccountHub server with the given configuration.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting AccountHub v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;
    migration::run_migrations(db.pool()).await?;

    let state = build_state(config, db)?;
    seed_first_superuser(&state).await?;

    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("AccountHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("AccountHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
