//! Authentication API integration tests
//!
//! Tests for register, login, the current-user endpoint and the
//! authentication gate itself.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{
    assert_error, create_test_server, create_test_user, login_user, register_user,
};

#[tokio::test]
async fn test_register_success() {
    let (server, _) = create_test_server();

    let response = register_user(&server, "A", "a@x.com", "p1").await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "User Registered");
    assert_eq!(body["user"]["name"], "A");
    assert_eq!(body["user"]["email"], "a@x.com");
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let (server, _) = create_test_server();
    register_user(&server, "A", "a@x.com", "p1").await;

    let response = register_user(&server, "A2", "a@x.com", "p2").await;

    assert_error(&response, StatusCode::BAD_REQUEST, "User already exists");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let (server, _) = create_test_server();

    let response = server
        .post("/auth/register")
        .json(&json!({ "name": "A", "email": "a@x.com" }))
        .await;

    assert_error(
        &response,
        StatusCode::BAD_REQUEST,
        "Name, email and password are required",
    );
}

#[tokio::test]
async fn test_register_rejects_non_json_body() {
    let (server, _) = create_test_server();

    let response = server.post("/auth/register").text("name=A").await;

    assert_error(
        &response,
        StatusCode::BAD_REQUEST,
        "Request body must be valid JSON",
    );
}

#[tokio::test]
async fn test_login_success() {
    let (server, state) = create_test_server();
    register_user(&server, "A", "a@x.com", "p1").await;

    let response = login_user(&server, "a@x.com", "p1").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let token = body["token"].as_str().unwrap();
    let identity = state.tokens.verify(token).unwrap();
    assert_eq!(identity.user_id().to_string(), body["user"]["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let (server, _) = create_test_server();
    register_user(&server, "A", "a@x.com", "p1").await;

    let wrong_password = login_user(&server, "a@x.com", "nope").await;
    let unknown_email = login_user(&server, "b@x.com", "p1").await;

    assert_error(&wrong_password, StatusCode::BAD_REQUEST, "Invalid credentials");
    assert_error(&unknown_email, StatusCode::BAD_REQUEST, "Invalid credentials");
}

#[tokio::test]
async fn test_password_prefix_past_72_bytes_does_not_log_in() {
    let (server, _) = create_test_server();
    let stored = "x".repeat(72);
    let too_long = format!("{}{}", stored, "y".repeat(28));

    let rejected = register_user(&server, "A", "a@x.com", &too_long).await;
    assert_error(&rejected, StatusCode::BAD_REQUEST, "Password must be at most 72 bytes");

    create_test_user(&server, "A", "a@x.com", &stored).await;
    let sharing_prefix = format!("{}{}", stored, "z".repeat(8));
    let response = login_user(&server, "a@x.com", &sharing_prefix).await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Invalid credentials");
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let (server, _) = create_test_server();
    let user = create_test_user(&server, "A", "a@x.com", "p1").await;

    let response = server.get("/auth/me").authorization_bearer(&user.token).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": user.id, "name": "A", "email": "a@x.com" })
    );
}

#[tokio::test]
async fn test_me_for_unknown_subject_is_not_found() {
    let (server, state) = create_test_server();
    let token = state.tokens.issue(Uuid::new_v4()).unwrap();

    let response = server.get("/auth/me").authorization_bearer(token).await;

    assert_error(&response, StatusCode::NOT_FOUND, "User not found");
}

#[tokio::test]
async fn test_gate_missing_token() {
    let (server, _) = create_test_server();

    let response = server.get("/auth/me").await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "No token provided");
}

#[tokio::test]
async fn test_gate_malformed_prefix_counts_as_missing() {
    let (server, _) = create_test_server();

    let response = server
        .get("/auth/me")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Token abc"))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "No token provided");
}

#[tokio::test]
async fn test_gate_expired_token() {
    let (server, state) = create_test_server();
    let user = create_test_user(&server, "A", "a@x.com", "p1").await;
    let token = state.tokens.issue_at(user.id, 1_000).unwrap();

    let response = server.get("/auth/me").authorization_bearer(token).await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Token has expired");
}

#[tokio::test]
async fn test_gate_invalid_token() {
    let (server, _) = create_test_server();

    let response = server
        .get("/auth/me")
        .authorization_bearer("invalid_token")
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_gate_rejects_token_from_another_secret() {
    let (server, _) = create_test_server();
    let user = create_test_user(&server, "A", "a@x.com", "p1").await;
    let foreign = blogcore::backend::auth::TokenService::new(
        b"some-other-secret",
        std::time::Duration::from_secs(3600),
    );
    let token = foreign.issue(user.id).unwrap();

    let response = server.get("/auth/me").authorization_bearer(token).await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (server, _) = create_test_server();

    let response = server.get("/nowhere").await;

    assert_error(&response, StatusCode::NOT_FOUND, "Route not found");
}
