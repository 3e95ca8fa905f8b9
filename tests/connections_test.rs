//! Connection-graph integration tests
//!
//! Exercises the symmetry and idempotence invariants of the pending and
//! connection sets.

mod common;

use common::auth_helpers::{bearer, connect_users, register_user, TestUser};
use common::{spawn_app, TestApp};
use pretty_assertions::assert_eq;
use serial_test::serial;

async fn me(app: &TestApp, user: &TestUser) -> serde_json::Value {
    let response = app
        .server
        .get("/api/auth/me")
        .add_header("authorization", bearer(user))
        .await;
    assert_eq!(response.status_code(), 200);
    response.json()
}

#[tokio::test]
#[serial]
async fn request_then_accept_is_symmetric() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;

    // alice requests a connection to bob
    let response = app
        .server
        .post("/api/connections/request")
        .add_header("authorization", bearer(&alice))
        .json(&serde_json::json!({ "target_user_id": bob.id }))
        .await;
    assert_eq!(response.status_code(), 200);

    // bob's pending list contains alice
    let bob_record = me(&app, &bob).await;
    assert_eq!(
        bob_record["pending_requests"],
        serde_json::json!([alice.id])
    );

    // bob accepts
    let response = app
        .server
        .post(&format!("/api/connections/accept/{}", alice.id))
        .add_header("authorization", bearer(&bob))
        .await;
    assert_eq!(response.status_code(), 200);

    // both sides list each other; bob's pending list is empty
    let alice_record = me(&app, &alice).await;
    let bob_record = me(&app, &bob).await;
    assert_eq!(alice_record["connections"], serde_json::json!([bob.id]));
    assert_eq!(bob_record["connections"], serde_json::json!([alice.id]));
    assert_eq!(bob_record["pending_requests"], serde_json::json!([]));
}

#[tokio::test]
#[serial]
async fn repeated_request_leaves_one_pending_entry() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;

    for _ in 0..2 {
        let response = app
            .server
            .post("/api/connections/request")
            .add_header("authorization", bearer(&alice))
            .json(&serde_json::json!({ "target_user_id": bob.id }))
            .await;
        assert_eq!(response.status_code(), 200);
    }

    let bob_record = me(&app, &bob).await;
    assert_eq!(
        bob_record["pending_requests"],
        serde_json::json!([alice.id])
    );
}

#[tokio::test]
#[serial]
async fn request_to_unknown_user_is_not_found() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/connections/request")
        .add_header("authorization", bearer(&alice))
        .json(&serde_json::json!({ "target_user_id": uuid::Uuid::new_v4() }))
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
#[serial]
async fn request_to_existing_connection_conflicts() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;
    connect_users(&app.server, &alice, &bob).await;

    let response = app
        .server
        .post("/api/connections/request")
        .add_header("authorization", bearer(&alice))
        .json(&serde_json::json!({ "target_user_id": bob.id }))
        .await;

    assert_eq!(response.status_code(), 409);
}

#[tokio::test]
#[serial]
async fn request_to_self_is_rejected() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/connections/request")
        .add_header("authorization", bearer(&alice))
        .json(&serde_json::json!({ "target_user_id": alice.id }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
#[serial]
async fn reject_clears_pending_without_touching_requester() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;

    let response = app
        .server
        .post("/api/connections/request")
        .add_header("authorization", bearer(&alice))
        .json(&serde_json::json!({ "target_user_id": bob.id }))
        .await;
    assert_eq!(response.status_code(), 200);

    let response = app
        .server
        .post(&format!("/api/connections/reject/{}", alice.id))
        .add_header("authorization", bearer(&bob))
        .await;
    assert_eq!(response.status_code(), 200);

    let alice_record = me(&app, &alice).await;
    let bob_record = me(&app, &bob).await;
    assert_eq!(bob_record["pending_requests"], serde_json::json!([]));
    assert_eq!(bob_record["connections"], serde_json::json!([]));
    assert_eq!(alice_record["connections"], serde_json::json!([]));
    assert_eq!(alice_record["pending_requests"], serde_json::json!([]));
}

#[tokio::test]
#[serial]
async fn accept_with_mutual_pending_requests_clears_both_sides() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;

    // Requests in both directions sit pending independently.
    for (from, to) in [(&alice, &bob), (&bob, &alice)] {
        let response = app
            .server
            .post("/api/connections/request")
            .add_header("authorization", bearer(from))
            .json(&serde_json::json!({ "target_user_id": to.id }))
            .await;
        assert_eq!(response.status_code(), 200);
    }

    let response = app
        .server
        .post(&format!("/api/connections/accept/{}", alice.id))
        .add_header("authorization", bearer(&bob))
        .await;
    assert_eq!(response.status_code(), 200);

    // No id may appear in both sets of one user: the reverse pending
    // entry is cleared by the accept.
    let alice_record = me(&app, &alice).await;
    let bob_record = me(&app, &bob).await;
    assert_eq!(alice_record["connections"], serde_json::json!([bob.id]));
    assert_eq!(alice_record["pending_requests"], serde_json::json!([]));
    assert_eq!(bob_record["connections"], serde_json::json!([alice.id]));
    assert_eq!(bob_record["pending_requests"], serde_json::json!([]));
}

#[tokio::test]
#[serial]
async fn listings_return_profiles_without_credentials() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;
    let carol = register_user(&app.server, "carol").await;
    connect_users(&app.server, &alice, &bob).await;

    // carol requests bob
    let response = app
        .server
        .post("/api/connections/request")
        .add_header("authorization", bearer(&carol))
        .json(&serde_json::json!({ "target_user_id": bob.id }))
        .await;
    assert_eq!(response.status_code(), 200);

    let response = app
        .server
        .get("/api/connections")
        .add_header("authorization", bearer(&bob))
        .await;
    assert_eq!(response.status_code(), 200);
    let connections: serde_json::Value = response.json();
    assert_eq!(connections.as_array().unwrap().len(), 1);
    assert_eq!(connections[0]["username"], "alice");
    assert!(connections[0].get("password_hash").is_none());

    let response = app
        .server
        .get("/api/connections/pending")
        .add_header("authorization", bearer(&bob))
        .await;
    assert_eq!(response.status_code(), 200);
    let pending: serde_json::Value = response.json();
    assert_eq!(pending.as_array().unwrap().len(), 1);
    assert_eq!(pending[0]["username"], "carol");
}

#[tokio::test]
#[serial]
async fn empty_listings_are_empty_not_errors() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;

    for path in ["/api/connections", "/api/connections/pending"] {
        let response = app
            .server
            .get(path)
            .add_header("authorization", bearer(&alice))
            .await;
        assert_eq!(response.status_code(), 200);
        let body: serde_json::Value = response.json();
        assert_eq!(body, serde_json::json!([]));
    }
}
