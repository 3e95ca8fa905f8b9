//! Connection graph: pending requests and accepted connections
//!
//! Connections are symmetric (A lists B iff B lists A) and pending requests
//! are one-directional. Every mutation is an idempotent set operation on
//! the user rows, so repeated requests and retried accepts cannot corrupt
//! the graph; the two-sided accept runs inside a single transaction.

pub mod db;
pub mod handlers;

pub use handlers::{
    accept_connection, list_connections, list_pending, reject_connection, request_connection,
};
