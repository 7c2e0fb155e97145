//! Root and health check handlers.

use axum::Json;

use crate::dto::response::{HealthResponse, MessageResponse};

/// GET /
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the AccountHub API".to_string(),
    })
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
