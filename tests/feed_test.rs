//! Feed integration tests
//!
//! Feed scoping by connection, like toggling, comment appends, and the
//! collapsed not-found error surface for deletes.

mod common;

use common::auth_helpers::{bearer, connect_users, register_user, TestUser};
use common::{spawn_app, TestApp};
use pretty_assertions::assert_eq;
use serial_test::serial;

async fn create_post(app: &TestApp, user: &TestUser, content: &str) -> serde_json::Value {
    let response = app
        .server
        .post("/api/posts")
        .add_header("authorization", bearer(user))
        .json(&serde_json::json!({ "content": content }))
        .await;
    assert_eq!(response.status_code(), 200, "{}", response.text());
    response.json()
}

async fn get_feed(app: &TestApp, user: &TestUser) -> serde_json::Value {
    let response = app
        .server
        .get("/api/posts")
        .add_header("authorization", bearer(user))
        .await;
    assert_eq!(response.status_code(), 200);
    response.json()
}

#[tokio::test]
#[serial]
async fn feed_is_scoped_to_connections_and_self() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;

    let post = create_post(&app, &alice, "hello from alice").await;

    // bob is not connected: alice's post is invisible
    let feed = get_feed(&app, &bob).await;
    assert_eq!(feed, serde_json::json!([]));

    // alice sees her own post
    let feed = get_feed(&app, &alice).await;
    assert_eq!(feed.as_array().unwrap().len(), 1);
    assert_eq!(feed[0]["id"], post["id"]);

    // after connecting, bob's feed includes it
    connect_users(&app.server, &bob, &alice).await;
    let feed = get_feed(&app, &bob).await;
    assert_eq!(feed.as_array().unwrap().len(), 1);
    assert_eq!(feed[0]["id"], post["id"]);
    assert_eq!(feed[0]["author_username"], "alice");
}

#[tokio::test]
#[serial]
async fn feed_is_newest_first() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;

    create_post(&app, &alice, "first").await;
    create_post(&app, &alice, "second").await;

    let feed = get_feed(&app, &alice).await;
    assert_eq!(feed[0]["content"], "second");
    assert_eq!(feed[1]["content"], "first");
}

#[tokio::test]
#[serial]
async fn like_toggles_and_double_toggle_restores() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;
    let post = create_post(&app, &alice, "like me").await;
    let post_id = post["id"].as_str().unwrap().to_string();

    let response = app
        .server
        .post(&format!("/api/posts/{post_id}/like"))
        .add_header("authorization", bearer(&alice))
        .await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["liked"], true);

    let feed = get_feed(&app, &alice).await;
    assert_eq!(feed[0]["likes"], serde_json::json!([alice.id]));

    // second toggle removes the like
    let response = app
        .server
        .post(&format!("/api/posts/{post_id}/like"))
        .add_header("authorization", bearer(&alice))
        .await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["liked"], false);

    let feed = get_feed(&app, &alice).await;
    assert_eq!(feed[0]["likes"], serde_json::json!([]));
}

#[tokio::test]
#[serial]
async fn like_on_missing_post_is_not_found() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;

    let response = app
        .server
        .post(&format!("/api/posts/{}/like", uuid::Uuid::new_v4()))
        .add_header("authorization", bearer(&alice))
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
#[serial]
async fn comments_append_in_order() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;
    connect_users(&app.server, &bob, &alice).await;

    let post = create_post(&app, &alice, "discuss").await;
    let post_id = post["id"].as_str().unwrap().to_string();

    for (user, text) in [(&alice, "first comment"), (&bob, "second comment")] {
        let response = app
            .server
            .post(&format!("/api/posts/{post_id}/comment"))
            .add_header("authorization", bearer(user))
            .json(&serde_json::json!({ "content": text }))
            .await;
        assert_eq!(response.status_code(), 200);
        let body: serde_json::Value = response.json();
        assert_eq!(body["comment"]["content"], text);
    }

    let feed = get_feed(&app, &alice).await;
    let comments = feed[0]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["content"], "first comment");
    assert_eq!(comments[0]["author_username"], "alice");
    assert_eq!(comments[1]["content"], "second comment");
    assert_eq!(comments[1]["author_username"], "bob");
}

#[tokio::test]
#[serial]
async fn comment_on_missing_post_is_not_found() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;

    let response = app
        .server
        .post(&format!("/api/posts/{}/comment", uuid::Uuid::new_v4()))
        .add_header("authorization", bearer(&alice))
        .json(&serde_json::json!({ "content": "into the void" }))
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
#[serial]
async fn delete_own_post_removes_it() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;
    let post = create_post(&app, &alice, "temporary").await;
    let post_id = post["id"].as_str().unwrap().to_string();

    let response = app
        .server
        .delete(&format!("/api/posts/{post_id}"))
        .add_header("authorization", bearer(&alice))
        .await;
    assert_eq!(response.status_code(), 200);

    let feed = get_feed(&app, &alice).await;
    assert_eq!(feed, serde_json::json!([]));
}

#[tokio::test]
#[serial]
async fn deleting_foreign_post_looks_like_deleting_nothing() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;
    let bob = register_user(&app.server, "bob").await;
    let post = create_post(&app, &alice, "not yours").await;
    let post_id = post["id"].as_str().unwrap().to_string();

    let foreign = app
        .server
        .delete(&format!("/api/posts/{post_id}"))
        .add_header("authorization", bearer(&bob))
        .await;

    let missing = app
        .server
        .delete(&format!("/api/posts/{}", uuid::Uuid::new_v4()))
        .add_header("authorization", bearer(&bob))
        .await;

    // Ownership must be indistinguishable from non-existence.
    assert_eq!(foreign.status_code(), 404);
    assert_eq!(missing.status_code(), 404);
    assert_eq!(foreign.text(), missing.text());

    // alice's post survived
    let feed = get_feed(&app, &alice).await;
    assert_eq!(feed.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn empty_post_content_is_rejected() {
    let app = spawn_app().await;
    let alice = register_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/posts")
        .add_header("authorization", bearer(&alice))
        .json(&serde_json::json!({ "content": "   " }))
        .await;

    assert_eq!(response.status_code(), 400);
}
