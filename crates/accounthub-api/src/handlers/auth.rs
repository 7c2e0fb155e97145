//! Auth handlers — registration, login, password recovery.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use accounthub_core::error::AppError;
use accounthub_service::auth::service::RegisterAccount;

use crate::dto::request::{
    LoginRequest, PasswordRecoveryRequest, PasswordResetRequest, RegisterRequest,
};
use crate::dto::response::{MessageResponse, TokenResponse, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let mut uow = state.db.begin().await?;
    let user = state
        .auth_service
        .register(
            uow.conn(),
            RegisterAccount {
                email: req.email,
                password: req.password,
                full_name: req.full_name,
            },
        )
        .await?;
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let mut uow = state.db.begin().await?;
    let tokens = state
        .auth_service
        .login(uow.conn(), &req.email, &req.password)
        .await?;
    uow.commit().await?;

    Ok(Json(TokenResponse {
        access_token: tokens.access_token,
        token_type: "bearer".to_string(),
        refresh_token: tokens.refresh_token,
    }))
}

/// POST /api/v1/auth/password-recovery
///
/// The acknowledgment is identical whether or not the account exists.
pub async fn recover_password(
    State(state): State<AppState>,
    Json(req): Json<PasswordRecoveryRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let mut uow = state.db.begin().await?;
    state.recovery_service.request(uow.conn(), &req.email).await?;
    uow.commit().await?;

    Ok(Json(MessageResponse {
        message: "If a user with this email exists, a recovery link has been sent".to_string(),
    }))
}

/// POST /api/v1/auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<PasswordResetRequest>,
) -> Result<StatusCode, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let mut uow = state.db.begin().await?;
    state
        .recovery_service
        .reset(
            uow.conn(),
            &req.token,
            &req.new_password,
            &req.new_password_confirm,
        )
        .await?;
    uow.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
