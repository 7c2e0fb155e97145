//! Integration tests for admin user management.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, unique_email};

async fn admin_token(app: &TestApp) -> (i64, String) {
    let email = unique_email("admin");
    let admin = app.create_user(&email, "password123", true, true).await;
    let token = app.login(&email, "password123").await;
    (admin.id, token)
}

#[tokio::test]
async fn test_list_users_contains_created_accounts() {
    let app = TestApp::new().await;
    let (_, token) = admin_token(&app).await;

    let member = unique_email("member");
    app.create_user(&member, "password123", true, false).await;

    let response = app
        .request("GET", "/api/v1/users?limit=200", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let emails: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|u| u["email"].as_str())
        .collect();
    assert!(emails.contains(&member.as_str()));
}

#[tokio::test]
async fn test_list_users_respects_skip_and_limit() {
    let app = TestApp::new().await;
    let (_, token) = admin_token(&app).await;

    let response = app
        .request("GET", "/api/v1/users?skip=0&limit=1", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_admin_creates_superuser() {
    let app = TestApp::new().await;
    let (_, token) = admin_token(&app).await;
    let email = unique_email("created-super");

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(json!({
                "email": email,
                "password": "password123",
                "full_name": "Second Admin",
                "is_superuser": true,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["is_superuser"], true);
    assert_eq!(response.body["is_active"], true);

    // The new superuser can hit admin endpoints.
    let new_token = app.login(&email, "password123").await;
    let response = app
        .request("GET", "/api/v1/users", None, Some(&new_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_create_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    let (_, token) = admin_token(&app).await;
    let email = unique_email("dup-admin");
    app.create_user(&email, "password123", true, false).await;

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(json!({ "email": email, "password": "password123" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = TestApp::new().await;
    let (_, token) = admin_token(&app).await;
    let email = unique_email("lookup");
    let user = app.create_user(&email, "password123", true, false).await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/users/{}", user.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], email.as_str());

    let response = app
        .request("GET", "/api/v1/users/999999999", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_deactivates_user() {
    let app = TestApp::new().await;
    let (_, token) = admin_token(&app).await;
    let email = unique_email("deactivate");
    let user = app.create_user(&email, "password123", true, false).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/users/{}", user.id),
            Some(json!({ "is_active": false })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["is_active"], false);

    // A deactivated account cannot start a session any more.
    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({ "email": email, "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let app = TestApp::new().await;
    let (admin_id, token) = admin_token(&app).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/users/{admin_id}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "SELF_OPERATION_FORBIDDEN");
}

#[tokio::test]
async fn test_deleting_twice_yields_not_found() {
    let app = TestApp::new().await;
    let (_, token) = admin_token(&app).await;
    let email = unique_email("double-delete");
    let user = app.create_user(&email, "password123", true, false).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/users/{}", user.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], email.as_str());

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/users/{}", user.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
