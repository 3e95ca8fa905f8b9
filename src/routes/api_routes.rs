/**
 * API Route Handlers
 *
 * Wires every `/api` endpoint to its handler.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/register` - user registration
 * - `POST /api/auth/login` - user login
 *
 * All remaining routes require a `Authorization: Bearer <jwt>` header,
 * enforced by the `AuthUser` extractor in each handler.
 *
 * ## Users
 * - `GET /api/auth/me` - current user
 * - `PUT /api/users/profile` - update own profile
 * - `GET /api/users/{id}` - user lookup
 * - `GET /api/users` - directory search
 *
 * ## Connections
 * - `POST /api/connections/request` - send a request
 * - `POST /api/connections/accept/{requester_id}` - accept
 * - `POST /api/connections/reject/{requester_id}` - reject
 * - `GET /api/connections/pending` - incoming requests
 * - `GET /api/connections` - accepted connections
 *
 * ## Feed
 * - `POST /api/posts`, `GET /api/posts`, `DELETE /api/posts/{id}`
 * - `POST /api/posts/{id}/like`, `POST /api/posts/{id}/comment`
 *
 * ## Messaging
 * - `POST /api/messages` - send
 * - `GET /api/messages/unread/count` - unread total
 * - `GET /api/messages/{other_id}` - conversation (marks read)
 *
 * ## Dashboard
 * - `GET /api/dashboard/stats`
 */

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::auth::{get_me, login, register};
use crate::connections;
use crate::dashboard::get_dashboard_stats;
use crate::feed;
use crate::messaging;
use crate::profiles;
use crate::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me))
        // Profile endpoints
        .route("/api/users/profile", put(profiles::update_profile))
        .route("/api/users/{user_id}", get(profiles::get_user))
        .route("/api/users", get(profiles::list_users))
        // Connection endpoints
        .route(
            "/api/connections/request",
            post(connections::request_connection),
        )
        .route(
            "/api/connections/accept/{requester_id}",
            post(connections::accept_connection),
        )
        .route(
            "/api/connections/reject/{requester_id}",
            post(connections::reject_connection),
        )
        .route("/api/connections/pending", get(connections::list_pending))
        .route("/api/connections", get(connections::list_connections))
        // Feed endpoints
        .route("/api/posts", post(feed::create_post).get(feed::get_feed))
        .route("/api/posts/{post_id}", delete(feed::delete_post))
        .route("/api/posts/{post_id}/like", post(feed::toggle_like))
        .route("/api/posts/{post_id}/comment", post(feed::add_comment))
        // Messaging endpoints. The static unread route takes precedence
        // over the `{other_id}` capture.
        .route("/api/messages", post(messaging::send_message))
        .route(
            "/api/messages/unread/count",
            get(messaging::unread_count),
        )
        .route(
            "/api/messages/{other_id}",
            get(messaging::fetch_conversation),
        )
        // Dashboard
        .route("/api/dashboard/stats", get(get_dashboard_stats))
}
