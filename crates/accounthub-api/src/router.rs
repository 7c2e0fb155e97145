//! Route definitions for the AccountHub HTTP API.
//!
//! Versioned routes are mounted under `/api/v1`. The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, post, put};
use axum::{Router, middleware as axum_middleware};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use accounthub_core::config::app::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(admin_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/", get(handlers::health::welcome))
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Open endpoints: registration, login, password recovery.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/auth/password-recovery",
            post(handlers::auth::recover_password),
        )
        .route("/auth/reset-password", post(handlers::auth::reset_password))
}

/// Self-service endpoints for the authenticated user.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/auth/me",
            get(handlers::user::me)
                .patch(handlers::user::update_me)
                .delete(handlers::user::delete_me),
        )
        .route("/auth/me/password", put(handlers::user::change_password))
}

/// Superuser-only user management endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::admin::users::list_users))
        .route("/users", post(handlers::admin::users::create_user))
        .route("/users/{id}", get(handlers::admin::users::get_user))
        .route("/users/{id}", put(handlers::admin::users::update_user))
        .route("/users/{id}", delete(handlers::admin::users::delete_user))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any);

    if config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}
