/**
 * Router Configuration
 *
 * Combines all route groups into the final Axum router:
 *
 * 1. API routes under `/api` (auth, users, connections, posts, messages,
 *    dashboard)
 * 2. The WebSocket endpoint at `/ws`
 * 3. CORS layer and a 404 fallback
 */

use axum::Router;

use crate::realtime::ws_endpoint;
use crate::routes::api_routes::configure_api_routes;
use crate::server::config::cors_layer;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = router
        // Live message channel
        .route("/ws", axum::routing::get(ws_endpoint))
        .fallback(|| async { "404 Not Found" })
        .layer(cors_layer());

    router.with_state(app_state)
}
