//! Common test utilities and helpers
//!
//! Shared across all integration suites:
//! - Database fixtures (pool setup, migrations, cleanup)
//! - A TestServer wired to a fresh application state
//! - Registration and connection helpers

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

use axum_test::TestServer;
use profnet::realtime::ChannelRegistry;
use profnet::routes::create_router;
use profnet::AppState;

/// A running test application: HTTP server plus the state behind it.
///
/// The state is exposed so tests can reach the live channel registry and
/// the pool directly.
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

/// Spawn a test application against a clean database
pub async fn spawn_app() -> TestApp {
    let db_pool = database::test_pool().await;

    let state = AppState {
        db_pool,
        registry: ChannelRegistry::new(),
    };

    let server = TestServer::new(create_router(state.clone())).expect("failed to start TestServer");

    TestApp { server, state }
}
