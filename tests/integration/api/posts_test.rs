//! Post API integration tests
//!
//! Creation, reads, owner-only edit and delete, and likes.

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{assert_error, create_test_server, create_test_user, TestUser};

async fn create_post(server: &TestServer, user: &TestUser, body: Value) -> Value {
    let response = server
        .post("/posts")
        .authorization_bearer(&user.token)
        .json(&body)
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()["post"].clone()
}

async fn fetch_post(server: &TestServer, id: &str) -> Value {
    server.get(&format!("/posts/{}", id)).await.json()
}

#[tokio::test]
async fn test_create_post_sets_author_from_token() {
    let (server, _) = create_test_server();
    let user = create_test_user(&server, "A", "a@x.com", "p1").await;

    let response = server
        .post("/posts")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": "T1", "content": "C1", "author": Uuid::new_v4() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Post created successfully");
    assert_eq!(body["post"]["author"], user.id.to_string());
    assert_eq!(body["post"]["likes"], 0);
    assert_eq!(body["post"]["category"], "Tech");
    assert_eq!(body["post"]["comments"], json!([]));
}

#[tokio::test]
async fn test_create_post_requires_token() {
    let (server, state) = create_test_server();

    let response = server
        .post("/posts")
        .json(&json!({ "title": "T1", "content": "C1" }))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "No token provided");
    assert!(state.posts.list_posts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_post_requires_title_and_content() {
    let (server, _) = create_test_server();
    let user = create_test_user(&server, "A", "a@x.com", "p1").await;

    let response = server
        .post("/posts")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": "T1", "content": "   " }))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Title and content are required");
}

#[tokio::test]
async fn test_create_post_rejects_unknown_category() {
    let (server, _) = create_test_server();
    let user = create_test_user(&server, "A", "a@x.com", "p1").await;

    let response = server
        .post("/posts")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": "T1", "content": "C1", "category": "Sports" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reads_expand_author() {
    let (server, _) = create_test_server();
    let user = create_test_user(&server, "A", "a@x.com", "p1").await;
    let post = create_post(
        &server,
        &user,
        json!({ "title": "T1", "content": "C1", "tags": "rust", "category": "Travel" }),
    )
    .await;

    let listed: Value = server.get("/posts").await.json();
    let single = fetch_post(&server, post["id"].as_str().unwrap()).await;

    let expected_author = json!({ "id": user.id, "name": "A", "email": "a@x.com" });
    assert_eq!(listed[0]["author"], expected_author);
    assert_eq!(single["author"], expected_author);
    assert_eq!(single["tags"], "rust");
    assert_eq!(single["category"], "Travel");
}

#[tokio::test]
async fn test_list_posts_newest_first() {
    let (server, _) = create_test_server();
    let user = create_test_user(&server, "A", "a@x.com", "p1").await;
    create_post(&server, &user, json!({ "title": "first", "content": "C" })).await;
    create_post(&server, &user, json!({ "title": "second", "content": "C" })).await;

    let listed: Value = server.get("/posts").await.json();

    assert_eq!(listed[0]["title"], "second");
    assert_eq!(listed[1]["title"], "first");
}

#[tokio::test]
async fn test_get_post_errors() {
    let (server, _) = create_test_server();

    let malformed = server.get("/posts/not-an-id").await;
    let missing = server.get(&format!("/posts/{}", Uuid::new_v4())).await;

    assert_error(&malformed, StatusCode::BAD_REQUEST, "Invalid post ID");
    assert_error(&missing, StatusCode::NOT_FOUND, "Post not found");
}

#[tokio::test]
async fn test_owner_edit_updates_fields_and_keeps_author() {
    let (server, _) = create_test_server();
    let owner = create_test_user(&server, "A", "a@x.com", "p1").await;
    let post = create_post(&server, &owner, json!({ "title": "T1", "content": "C1" })).await;
    let id = post["id"].as_str().unwrap();

    let response = server
        .put(&format!("/posts/{}", id))
        .authorization_bearer(&owner.token)
        .json(&json!({ "title": "T2", "content": "", "author": Uuid::new_v4() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Post updated");
    assert_eq!(body["post"]["title"], "T2");
    assert_eq!(body["post"]["content"], "C1");
    assert_eq!(body["post"]["author"], owner.id.to_string());
}

#[tokio::test]
async fn test_non_owner_cannot_edit_or_delete() {
    let (server, _) = create_test_server();
    let owner = create_test_user(&server, "A", "a@x.com", "p1").await;
    let other = create_test_user(&server, "B", "b@x.com", "p2").await;
    let post = create_post(&server, &owner, json!({ "title": "T1", "content": "C1" })).await;
    let id = post["id"].as_str().unwrap();
    let before = fetch_post(&server, id).await;

    let edit = server
        .put(&format!("/posts/{}", id))
        .authorization_bearer(&other.token)
        .json(&json!({ "title": "hijacked" }))
        .await;
    let delete = server
        .delete(&format!("/posts/{}", id))
        .authorization_bearer(&other.token)
        .await;

    assert_error(&edit, StatusCode::FORBIDDEN, "Not authorized");
    assert_error(&delete, StatusCode::FORBIDDEN, "Not authorized");
    assert_eq!(fetch_post(&server, id).await, before);
}

#[tokio::test]
async fn test_edit_and_delete_without_token_do_not_mutate() {
    let (server, _) = create_test_server();
    let owner = create_test_user(&server, "A", "a@x.com", "p1").await;
    let post = create_post(&server, &owner, json!({ "title": "T1", "content": "C1" })).await;
    let id = post["id"].as_str().unwrap();
    let before = fetch_post(&server, id).await;

    let edit = server
        .put(&format!("/posts/{}", id))
        .json(&json!({ "title": "T2" }))
        .await;
    let delete = server.delete(&format!("/posts/{}", id)).await;

    assert_error(&edit, StatusCode::UNAUTHORIZED, "No token provided");
    assert_error(&delete, StatusCode::UNAUTHORIZED, "No token provided");
    assert_eq!(fetch_post(&server, id).await, before);
}

#[tokio::test]
async fn test_edit_and_delete_missing_post() {
    let (server, _) = create_test_server();
    let owner = create_test_user(&server, "A", "a@x.com", "p1").await;
    let path = format!("/posts/{}", Uuid::new_v4());

    let edit = server
        .put(&path)
        .authorization_bearer(&owner.token)
        .json(&json!({ "title": "T2" }))
        .await;
    let delete = server.delete(&path).authorization_bearer(&owner.token).await;

    assert_error(&edit, StatusCode::NOT_FOUND, "Post not found");
    assert_error(&delete, StatusCode::NOT_FOUND, "Post not found");
}

#[tokio::test]
async fn test_edit_body_is_checked_after_ownership() {
    let (server, _) = create_test_server();
    let owner = create_test_user(&server, "A", "a@x.com", "p1").await;
    let other = create_test_user(&server, "B", "b@x.com", "p2").await;
    let post = create_post(&server, &owner, json!({ "title": "T1", "content": "C1" })).await;
    let id = post["id"].as_str().unwrap();
    let bad_category = json!({ "category": "Sports" });

    let stranger = server
        .put(&format!("/posts/{}", id))
        .authorization_bearer(&other.token)
        .json(&bad_category)
        .await;
    let missing = server
        .put(&format!("/posts/{}", Uuid::new_v4()))
        .authorization_bearer(&owner.token)
        .json(&bad_category)
        .await;
    let by_owner = server
        .put(&format!("/posts/{}", id))
        .authorization_bearer(&owner.token)
        .json(&bad_category)
        .await;

    assert_error(&stranger, StatusCode::FORBIDDEN, "Not authorized");
    assert_error(&missing, StatusCode::NOT_FOUND, "Post not found");
    assert_eq!(by_owner.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(fetch_post(&server, id).await["category"], "Tech");
}

#[tokio::test]
async fn test_malformed_id_is_checked_after_the_gate() {
    let (server, _) = create_test_server();
    let owner = create_test_user(&server, "A", "a@x.com", "p1").await;

    let anonymous = server.delete("/posts/not-an-id").await;
    let authenticated = server
        .delete("/posts/not-an-id")
        .authorization_bearer(&owner.token)
        .await;

    assert_error(&anonymous, StatusCode::UNAUTHORIZED, "No token provided");
    assert_error(&authenticated, StatusCode::BAD_REQUEST, "Invalid post ID");
}

#[tokio::test]
async fn test_owner_delete_removes_post() {
    let (server, _) = create_test_server();
    let owner = create_test_user(&server, "A", "a@x.com", "p1").await;
    let post = create_post(&server, &owner, json!({ "title": "T1", "content": "C1" })).await;
    let id = post["id"].as_str().unwrap();

    let response = server
        .delete(&format!("/posts/{}", id))
        .authorization_bearer(&owner.token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "message": "Post deleted" }));
    let gone = server.get(&format!("/posts/{}", id)).await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_like_is_anonymous_and_counts() {
    let (server, _) = create_test_server();
    let owner = create_test_user(&server, "A", "a@x.com", "p1").await;
    let post = create_post(&server, &owner, json!({ "title": "T1", "content": "C1" })).await;
    let path = format!("/posts/{}/like", post["id"].as_str().unwrap());

    let first = server.post(&path).await;
    let second = server.post(&path).await;

    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(
        second.json::<Value>(),
        json!({ "message": "Post liked successfully", "likes": 2 })
    );
}

#[tokio::test]
async fn test_like_missing_post() {
    let (server, _) = create_test_server();

    let response = server.post(&format!("/posts/{}/like", Uuid::new_v4())).await;

    assert_error(&response, StatusCode::NOT_FOUND, "Post not found");
}
