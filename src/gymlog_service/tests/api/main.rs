use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use gymlog_adapters::{
    hashing::Argon2PasswordHasher,
    persistence::{InMemoryCheckInStore, InMemoryUserStore},
};
use gymlog_service::CheckInService;

/// The full router with in-memory stores and the real Argon2 hasher.
fn app() -> Router {
    CheckInService::new(
        InMemoryUserStore::new(),
        InMemoryCheckInStore::new(),
        Argon2PasswordHasher::default(),
    )
    .into_router(None)
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

async fn register_john_doe(app: &Router) -> Value {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/users",
        Some(json!({
            "name": "John Doe",
            "email": "johndoe@example.com",
            "password": "123456",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn registers_and_authenticates_a_user() {
    let app = app();
    let registered = register_john_doe(&app).await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/sessions",
        Some(json!({
            "email": "johndoe@example.com",
            "password": "123456",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "johndoe@example.com");
    assert_eq!(body["id"], registered["id"]);
    // The hash never crosses the API boundary.
    assert!(body.get("password_hash").is_none());
    assert!(registered.get("password_hash").is_none());
}

#[tokio::test]
async fn rejects_wrong_password() {
    let app = app();
    register_john_doe(&app).await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/sessions",
        Some(json!({
            "email": "johndoe@example.com",
            "password": "wrongpass",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn rejects_unknown_email_with_the_same_error() {
    let app = app();
    register_john_doe(&app).await;

    let (wrong_password_status, wrong_password_body) = send_json(
        &app,
        Method::POST,
        "/sessions",
        Some(json!({
            "email": "johndoe@example.com",
            "password": "wrongpass",
        })),
    )
    .await;
    let (unknown_email_status, unknown_email_body) = send_json(
        &app,
        Method::POST,
        "/sessions",
        Some(json!({
            "email": "nosuchuser@example.com",
            "password": "123456",
        })),
    )
    .await;

    // The two failures are indistinguishable from the outside.
    assert_eq!(wrong_password_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password_body, unknown_email_body);
}

#[tokio::test]
async fn rejects_duplicate_registration() {
    let app = app();
    register_john_doe(&app).await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/users",
        Some(json!({
            "name": "John Doe",
            "email": "johndoe@example.com",
            "password": "123456",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already in use");
}

#[tokio::test]
async fn rejects_malformed_email() {
    let app = app();

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/users",
        Some(json!({
            "name": "John Doe",
            "email": "not-an-email",
            "password": "123456",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn checks_in_once_per_day_and_counts_visits() {
    let app = app();
    let registered = register_john_doe(&app).await;
    let user_id = registered["id"].as_str().unwrap().to_string();
    let gym_id = "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee";

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/check-ins",
        Some(json!({ "user_id": user_id, "gym_id": gym_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user_id"].as_str().unwrap(), user_id);

    // Second check-in on the same day is refused.
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/check-ins",
        Some(json!({ "user_id": user_id, "gym_id": gym_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Already checked in today");

    let (status, body) = send_json(
        &app,
        Method::GET,
        &format!("/users/{user_id}/check-ins/count"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["check_ins_count"], 1);
}

#[tokio::test]
async fn check_in_requires_an_existing_user() {
    let app = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/check-ins",
        Some(json!({
            "user_id": "11111111-2222-3333-4444-555555555555",
            "gym_id": "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn unknown_user_has_a_zero_count() {
    let app = app();

    let (status, body) = send_json(
        &app,
        Method::GET,
        "/users/11111111-2222-3333-4444-555555555555/check-ins/count",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["check_ins_count"], 0);
}
