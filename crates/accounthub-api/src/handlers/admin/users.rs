//! Admin user management handlers.
//!
//! Every operation here runs the full access-control chain: the caller
//! must present a valid token for an active superuser.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use accounthub_core::error::AppError;
use accounthub_service::user::admin::{AdminUpdateAccount, CreateAccount};

use crate::dto::request::{AdminCreateUserRequest, AdminUpdateUserRequest};
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::{BearerToken, ListParams};
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let mut uow = state.db.begin().await?;
    state
        .access_chain
        .current_active_superuser(uow.conn(), bearer.token())
        .await?;
    let users = state
        .admin_service
        .list(uow.conn(), params.offset(), params.limit())
        .await?;
    uow.commit().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(req): Json<AdminCreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let mut uow = state.db.begin().await?;
    let acting = state
        .access_chain
        .current_active_superuser(uow.conn(), bearer.token())
        .await?;
    let user = state
        .admin_service
        .create(
            uow.conn(),
            &acting,
            CreateAccount {
                email: req.email,
                password: req.password,
                full_name: req.full_name,
                is_active: req.is_active,
                is_superuser: req.is_superuser,
            },
        )
        .await?;
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let mut uow = state.db.begin().await?;
    state
        .access_chain
        .current_active_superuser(uow.conn(), bearer.token())
        .await?;
    let user = state.admin_service.get(uow.conn(), user_id).await?;
    uow.commit().await?;

    Ok(Json(user.into()))
}

/// PUT /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(user_id): Path<i64>,
    Json(req): Json<AdminUpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let mut uow = state.db.begin().await?;
    let acting = state
        .access_chain
        .current_active_superuser(uow.conn(), bearer.token())
        .await?;
    let user = state
        .admin_service
        .update(
            uow.conn(),
            &acting,
            user_id,
            AdminUpdateAccount {
                email: req.email,
                password: req.password,
                full_name: req.full_name,
                is_active: req.is_active,
                is_superuser: req.is_superuser,
            },
        )
        .await?;
    uow.commit().await?;

    Ok(Json(user.into()))
}

/// DELETE /api/v1/users/{id}
///
/// Returns the deleted representation.
pub async fn delete_user(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let mut uow = state.db.begin().await?;
    let acting = state
        .access_chain
        .current_active_superuser(uow.conn(), bearer.token())
        .await?;
    let user = state
        .admin_service
        .delete(uow.conn(), &acting, user_id)
        .await?;
    uow.commit().await?;

    Ok(Json(user.into()))
}
