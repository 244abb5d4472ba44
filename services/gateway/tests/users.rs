//! User administration routes
mod common;

use axum::http::{header::AUTHORIZATION, StatusCode};
use common::{assert_envelope, error_of, server, token, FakeBackends, ADMIN_TOKEN, CUSTOMER_TOKEN};
use serde_json::{json, Value};

#[tokio::test]
async fn test_admin_user_lifecycle() {
    let backends = FakeBackends::new();
    let server = server(&backends);

    let created = server
        .post("/v1/user")
        .add_header(AUTHORIZATION, token(ADMIN_TOKEN))
        .json(&json!({"username": "carl", "password": "pw1", "user_type": "CUSTOMER"}))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let body: Value = created.json();
    assert_envelope(&body);
    assert_eq!(body["data"]["username"], "carl");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let fetched = server
        .get(&format!("/v1/user/{id}"))
        .add_header(AUTHORIZATION, token(ADMIN_TOKEN))
        .await;
    assert_eq!(fetched.status_code(), StatusCode::OK);

    let updated = server
        .put("/v1/user")
        .add_header(AUTHORIZATION, token(ADMIN_TOKEN))
        .json(&json!({"id": id, "password": "pw2"}))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);

    // The new password logs in
    let login = server
        .post("/v1/login")
        .json(&json!({"username": "carl", "password": "pw2"}))
        .await;
    assert_eq!(login.status_code(), StatusCode::CREATED);

    let deleted = server
        .delete(&format!("/v1/user/{id}"))
        .add_header(AUTHORIZATION, token(ADMIN_TOKEN))
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let gone = server
        .get(&format!("/v1/user/{id}"))
        .add_header(AUTHORIZATION, token(ADMIN_TOKEN))
        .await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_username_is_bad_request() {
    let backends = FakeBackends::new();
    let server = server(&backends);

    let response = server
        .post("/v1/user")
        .add_header(AUTHORIZATION, token(ADMIN_TOKEN))
        .json(&json!({"username": "ann", "password": "x", "user_type": "CUSTOMER"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(error_of(&body), "username ann already taken");
}

#[tokio::test]
async fn test_list_users_as_admin() {
    let backends = FakeBackends::new();
    let server = server(&backends);

    let response = server
        .get("/v1/user")
        .add_header(AUTHORIZATION, token(ADMIN_TOKEN))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["users"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_customer_cannot_manage_users() {
    let backends = FakeBackends::new();
    let server = server(&backends);

    let response = server
        .get("/v1/user/u-admin")
        .add_header(AUTHORIZATION, token(CUSTOMER_TOKEN))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(error_of(&body), "Permission Denied");
    assert!(backends.resource_calls().is_empty());
}
