//! ProfNet - Professional Networking Backend
//!
//! A social-networking backend: account registration/login, profile
//! management, a symmetric connection graph, a connection-scoped feed of
//! posts with likes and comments, and direct messaging with best-effort
//! real-time delivery over a per-user WebSocket channel.
//!
//! # Module Structure
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, JWT tokens, user records
//! - **`middleware`** - Bearer-token authentication extractor
//! - **`profiles`** - Profile updates and user directory search
//! - **`connections`** - Pending-request and connection-graph operations
//! - **`feed`** - Posts, likes, comments, connection-scoped feed
//! - **`messaging`** - Direct messages, conversations, unread counts
//! - **`realtime`** - Live channel registry and WebSocket endpoint
//! - **`dashboard`** - Read-only aggregate statistics
//! - **`error`** - API error taxonomy and HTTP response conversion
//!
//! # Consistency Model
//!
//! The store provides per-row atomicity; graph mutations are expressed as
//! idempotent set operations (conditional `array_append` / `array_remove`)
//! so they are safe under concurrent retry. The one multi-row operation,
//! accepting a connection, runs inside a single transaction. The live
//! channel registry is the only shared in-memory state and serializes all
//! binding mutations behind a mutex.

pub mod auth;
pub mod connections;
pub mod dashboard;
pub mod error;
pub mod feed;
pub mod messaging;
pub mod middleware;
pub mod profiles;
pub mod realtime;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::create_app;
pub use server::state::AppState;
