//! Integration tests for self-service profile operations.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, unique_email};

#[tokio::test]
async fn test_update_profile_fields() {
    let app = TestApp::new().await;
    let email = unique_email("profile");
    app.create_user(&email, "password123", true, false).await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/auth/me",
            Some(json!({ "full_name": "Ada Lovelace" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["full_name"], "Ada Lovelace");
    // An absent field stays unchanged.
    assert_eq!(response.body["email"], email.as_str());
}

#[tokio::test]
async fn test_update_profile_clears_name_with_null() {
    let app = TestApp::new().await;
    let email = unique_email("profile-clear");
    app.create_user(&email, "password123", true, false).await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/auth/me",
            Some(json!({ "full_name": "Ada Lovelace" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.body["full_name"], "Ada Lovelace");

    // An absent key keeps the name...
    let response = app
        .request("PATCH", "/api/v1/auth/me", Some(json!({})), Some(&token))
        .await;
    assert_eq!(response.body["full_name"], "Ada Lovelace");

    // ...while an explicit null clears it.
    let response = app
        .request(
            "PATCH",
            "/api/v1/auth/me",
            Some(json!({ "full_name": null })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["full_name"].is_null());
}

#[tokio::test]
async fn test_update_profile_email_conflict() {
    let app = TestApp::new().await;
    let email = unique_email("profile-a");
    let taken = unique_email("profile-b");
    app.create_user(&email, "password123", true, false).await;
    app.create_user(&taken, "password123", true, false).await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/auth/me",
            Some(json!({ "email": taken })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_change_password_requires_correct_current() {
    let app = TestApp::new().await;
    let email = unique_email("chpw-wrong");
    app.create_user(&email, "password123", true, false).await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/v1/auth/me/password",
            Some(json!({
                "current_password": "not-my-password",
                "new_password": "next-password",
                "new_password_confirm": "next-password",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    // The old password still authenticates.
    app.login(&email, "password123").await;
}

#[tokio::test]
async fn test_change_password_rejects_same_password() {
    let app = TestApp::new().await;
    let email = unique_email("chpw-same");
    app.create_user(&email, "password123", true, false).await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/v1/auth/me/password",
            Some(json!({
                "current_password": "password123",
                "new_password": "password123",
                "new_password_confirm": "password123",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_change_password_rejects_mismatched_confirmation() {
    let app = TestApp::new().await;
    let email = unique_email("chpw-confirm");
    app.create_user(&email, "password123", true, false).await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/v1/auth/me/password",
            Some(json!({
                "current_password": "password123",
                "new_password": "next-password",
                "new_password_confirm": "other-password",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_change_password_success() {
    let app = TestApp::new().await;
    let email = unique_email("chpw-ok");
    app.create_user(&email, "password123", true, false).await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/v1/auth/me/password",
            Some(json!({
                "current_password": "password123",
                "new_password": "next-password",
                "new_password_confirm": "next-password",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": email, "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    app.login(&email, "next-password").await;
}

#[tokio::test]
async fn test_delete_me() {
    let app = TestApp::new().await;
    let email = unique_email("delete-me");
    app.create_user(&email, "password123", true, false).await;
    let token = app.login(&email, "password123").await;

    let response = app
        .request("DELETE", "/api/v1/auth/me", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", "/api/v1/auth/me", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
