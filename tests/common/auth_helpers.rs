//! Authentication test helpers
//!
//! Provides utilities for registering test users, logging them in and
//! minting tokens directly.

use axum_test::{TestResponse, TestServer};
use serde_json::json;
use uuid::Uuid;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// POST /auth/register
pub async fn register_user(
    server: &TestServer,
    name: &str,
    email: &str,
    password: &str,
) -> TestResponse {
    server
        .post("/auth/register")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await
}

/// POST /auth/login
pub async fn login_user(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await
}

/// Register and log in a user through the API
pub async fn create_test_user(
    server: &TestServer,
    name: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let registered = register_user(server, name, email, password).await;
    assert_eq!(registered.status_code(), axum::http::StatusCode::CREATED);

    let body: serde_json::Value = login_user(server, email, password).await.json();
    let id = body["user"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("login response carries the user id");

    TestUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        token: body["token"].as_str().expect("login response carries a token").to_string(),
    }
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(server: &TestServer) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(server, "Test User", &email, "test_password_123").await
}
