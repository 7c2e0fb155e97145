//! Integration tests for login and the access-control chain.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, unique_email};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let email = unique_email("login");
    app.create_user(&email, "password123", true, false).await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": email, "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("access_token").is_some());
    assert!(response.body.get("refresh_token").is_some());
    assert_eq!(response.body["token_type"], "bearer");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    let email = unique_email("badpw");
    app.create_user(&email, "password123", true, false).await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": email, "password": "wrongpassword" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": unique_email("nobody"), "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_inactive_user() {
    let app = TestApp::new().await;
    let email = unique_email("inactive-login");
    app.create_user(&email, "password123", false, false).await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": email, "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN_INACTIVE");
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/v1/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/v1/auth/me", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let app = TestApp::new().await;
    let email = unique_email("me");
    app.create_user(&email, "password123", true, false).await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request("GET", "/api/v1/auth/me", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], email.as_str());
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_me_inactive_user_forbidden() {
    let app = TestApp::new().await;
    let email = unique_email("inactive-me");
    app.create_user(&email, "password123", false, false).await;

    // The chain must reject a deactivated account even with a valid token.
    let token = app.state.jwt_encoder.access_token(&email).unwrap();

    let response = app
        .request("GET", "/api/v1/auth/me", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN_INACTIVE");
}

#[tokio::test]
async fn test_admin_endpoint_rejects_plain_user() {
    let app = TestApp::new().await;
    let email = unique_email("plain");
    app.create_user(&email, "password123", true, false).await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request("GET", "/api/v1/users", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN_PRIVILEGE");
}

#[tokio::test]
async fn test_admin_endpoint_accepts_superuser() {
    let app = TestApp::new().await;
    let email = unique_email("super");
    app.create_user(&email, "password123", true, true).await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request("GET", "/api/v1/users", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_inactive_superuser_fails_at_active_check() {
    let app = TestApp::new().await;
    let email = unique_email("inactive-super");
    app.create_user(&email, "password123", false, true).await;
    let token = app.state.jwt_encoder.access_token(&email).unwrap();

    let response = app
        .request("GET", "/api/v1/users", None, Some(&token))
        .await;

    // Deactivation vetoes before the role check ever runs.
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN_INACTIVE");
}

#[tokio::test]
async fn test_register_login_delete_flow() {
    let app = TestApp::new().await;
    let email = unique_email("lifecycle");

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({ "email": email, "password": "pw123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["is_superuser"], false);
    let user_id = response.body["id"].as_i64().unwrap();

    let token = app.login(&email, "pw123").await;

    let response = app
        .request("GET", "/api/v1/auth/me", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], email.as_str());

    // An admin removes the account.
    let admin_email = unique_email("lifecycle-admin");
    app.create_user(&admin_email, "password123", true, true).await;
    let admin_token = app.login(&admin_email, "password123").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/users/{user_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The old token no longer resolves to a user.
    let response = app
        .request("GET", "/api/v1/auth/me", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Neither do the old credentials.
    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": email, "password": "pw123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    let email = unique_email("dup");
    app.create_user(&email, "password123", true, false).await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({ "email": email, "password": "pw123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}
