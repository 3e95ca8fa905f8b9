/**
 * Server Initialization
 *
 * Assembles the application: database pool, live channel registry,
 * router. The registry starts empty; bindings appear as WebSocket
 * clients connect.
 */

use axum::Router;

use crate::realtime::ChannelRegistry;
use crate::routes::create_router;
use crate::server::config::{load_database, ConfigError};
use crate::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app() -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing backend server");

    let db_pool = load_database().await?;

    let app_state = AppState {
        db_pool,
        registry: ChannelRegistry::new(),
    };

    Ok(create_router(app_state))
}
