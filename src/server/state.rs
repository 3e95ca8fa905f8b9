/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction, so handlers can take
 * exactly the piece of state they need.
 *
 * # Thread Safety
 *
 * - `PgPool` is internally reference-counted and thread-safe
 * - `ChannelRegistry` serializes its binding map behind a mutex
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::realtime::ChannelRegistry;

/// Central state container for the Axum application
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Required: the core's durability
    /// guarantees depend on the store being reachable.
    pub db_pool: PgPool,

    /// Live channel registry for real-time message delivery
    pub registry: ChannelRegistry,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for ChannelRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.registry.clone()
    }
}
