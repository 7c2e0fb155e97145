//! Self-service handlers for the authenticated user.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use accounthub_core::error::AppError;
use accounthub_service::user::service::UpdateProfile;

use crate::dto::request::{ChangePasswordRequest, UpdateProfileRequest};
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::BearerToken;
use crate::state::AppState;

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<Json<UserResponse>, ApiError> {
    let mut uow = state.db.begin().await?;
    let user = state
        .access_chain
        .current_active_user(uow.conn(), bearer.token())
        .await?;
    uow.commit().await?;

    Ok(Json(user.into()))
}

/// PATCH /api/v1/auth/me
pub async fn update_me(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let mut uow = state.db.begin().await?;
    let current = state
        .access_chain
        .current_active_user(uow.conn(), bearer.token())
        .await?;
    let user = state
        .user_service
        .update_me(
            uow.conn(),
            &current,
            UpdateProfile {
                email: req.email,
                password: req.password,
                full_name: req.full_name,
            },
        )
        .await?;
    uow.commit().await?;

    Ok(Json(user.into()))
}

/// PUT /api/v1/auth/me/password
pub async fn change_password(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    if req.new_password != req.new_password_confirm {
        return Err(AppError::validation("Passwords do not match").into());
    }

    let mut uow = state.db.begin().await?;
    let current = state
        .access_chain
        .current_active_user(uow.conn(), bearer.token())
        .await?;
    state
        .user_service
        .change_password(
            uow.conn(),
            &current,
            &req.current_password,
            &req.new_password,
        )
        .await?;
    uow.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/auth/me
pub async fn delete_me(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<StatusCode, ApiError> {
    let mut uow = state.db.begin().await?;
    let current = state
        .access_chain
        .current_active_user(uow.conn(), bearer.token())
        .await?;
    state.user_service.delete_me(uow.conn(), &current).await?;
    uow.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
