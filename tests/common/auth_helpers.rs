//! Registration and connection helpers for integration tests

use axum_test::TestServer;
use uuid::Uuid;

/// A registered test user with their bearer token
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub token: String,
}

/// Register a user through the public API and return their identity
pub async fn register_user(server: &TestServer, username: &str) -> TestUser {
    let email = format!("{username}@example.com");

    let response = server
        .post("/api/auth/register")
        .json(&serde_json::json!({
            "username": username,
            "email": email,
            "password": "password123",
            "full_name": format!("{username} Example"),
            "profession": "Engineer",
        }))
        .await;

    assert_eq!(
        response.status_code(),
        200,
        "registration failed: {}",
        response.text()
    );

    let body: serde_json::Value = response.json();
    TestUser {
        id: body["user"]["id"]
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("registration response missing user id"),
        username: username.to_string(),
        email,
        token: body["token"]
            .as_str()
            .expect("registration response missing token")
            .to_string(),
    }
}

/// Bearer header value for a test user
pub fn bearer(user: &TestUser) -> String {
    format!("Bearer {}", user.token)
}

/// Establish a connection: `requester` requests, `target` accepts
pub async fn connect_users(server: &TestServer, requester: &TestUser, target: &TestUser) {
    let response = server
        .post("/api/connections/request")
        .add_header("authorization", bearer(requester))
        .json(&serde_json::json!({ "target_user_id": target.id }))
        .await;
    assert_eq!(response.status_code(), 200);

    let response = server
        .post(&format!("/api/connections/accept/{}", requester.id))
        .add_header("authorization", bearer(target))
        .await;
    assert_eq!(response.status_code(), 200);
}
