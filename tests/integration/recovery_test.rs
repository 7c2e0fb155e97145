//! Integration tests for the password-reset protocol.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, unique_email};

/// Captures the reset token that the service would deliver out-of-band.
async fn request_reset_token(app: &TestApp, email: &str) -> String {
    let mut uow = app.state.db.begin().await.unwrap();
    let token = app
        .state
        .recovery_service
        .request(uow.conn(), email)
        .await
        .unwrap()
        .expect("no token issued for existing user");
    uow.commit().await.unwrap();
    token
}

#[tokio::test]
async fn test_recovery_acknowledgment_is_uniform() {
    let app = TestApp::new().await;
    let known = unique_email("recovery-known");
    app.create_user(&known, "password123", true, false).await;

    let for_known = app
        .request(
            "POST",
            "/api/v1/auth/password-recovery",
            Some(json!({ "email": known })),
            None,
        )
        .await;
    let for_unknown = app
        .request(
            "POST",
            "/api/v1/auth/password-recovery",
            Some(json!({ "email": unique_email("recovery-unknown") })),
            None,
        )
        .await;

    // The endpoint must not reveal whether the account exists.
    assert_eq!(for_known.status, StatusCode::OK);
    assert_eq!(for_unknown.status, StatusCode::OK);
    assert_eq!(for_known.body, for_unknown.body);
}

#[tokio::test]
async fn test_reset_flow() {
    let app = TestApp::new().await;
    let email = unique_email("reset");
    app.create_user(&email, "old-password", true, false).await;
    let token = request_reset_token(&app, &email).await;
    let hash_before = app.password_hash_of(&email).await;

    // Mismatched confirmation is rejected before anything is stored.
    let response = app
        .request(
            "POST",
            "/api/v1/auth/reset-password",
            Some(json!({
                "token": token,
                "new_password": "new-password",
                "new_password_confirm": "other-password",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.password_hash_of(&email).await, hash_before);

    // A tampered signature is rejected.
    let tampered = format!("{token}xx");
    let response = app
        .request(
            "POST",
            "/api/v1/auth/reset-password",
            Some(json!({
                "token": tampered,
                "new_password": "new-password",
                "new_password_confirm": "new-password",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.password_hash_of(&email).await, hash_before);

    // The genuine token goes through.
    let response = app
        .request(
            "POST",
            "/api/v1/auth/reset-password",
            Some(json!({
                "token": token,
                "new_password": "new-password",
                "new_password_confirm": "new-password",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    // Old credentials are dead, new ones work.
    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": email, "password": "old-password" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    app.login(&email, "new-password").await;
}

#[tokio::test]
async fn test_reset_for_vanished_user_is_not_found() {
    let app = TestApp::new().await;
    let email = unique_email("reset-vanished");

    // A structurally valid token whose subject never existed.
    let token = app.state.jwt_encoder.password_reset_token(&email).unwrap();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/reset-password",
            Some(json!({
                "token": token,
                "new_password": "new-password",
                "new_password_confirm": "new-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reset_for_inactive_user_is_forbidden() {
    let app = TestApp::new().await;
    let email = unique_email("reset-inactive");
    app.create_user(&email, "password123", false, false).await;
    let token = app.state.jwt_encoder.password_reset_token(&email).unwrap();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/reset-password",
            Some(json!({
                "token": token,
                "new_password": "new-password",
                "new_password_confirm": "new-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN_INACTIVE");
}

#[tokio::test]
async fn test_access_token_cannot_reset_password() {
    let app = TestApp::new().await;
    let email = unique_email("reset-cross");
    app.create_user(&email, "password123", true, false).await;

    // An access token is signed with the wrong key for this flow.
    let access_token = app.state.jwt_encoder.access_token(&email).unwrap();
    let hash_before = app.password_hash_of(&email).await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/reset-password",
            Some(json!({
                "token": access_token,
                "new_password": "new-password",
                "new_password_confirm": "new-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.password_hash_of(&email).await, hash_before);
}

#[tokio::test]
async fn test_reset_token_cannot_authenticate() {
    let app = TestApp::new().await;
    let email = unique_email("reset-as-access");
    app.create_user(&email, "password123", true, false).await;

    let reset_token = app.state.jwt_encoder.password_reset_token(&email).unwrap();

    let response = app
        .request("GET", "/api/v1/auth/me", None, Some(&reset_token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
