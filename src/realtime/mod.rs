//! Live message delivery
//!
//! Maps an identity to at most one open delivery endpoint and routes
//! freshly persisted messages to it, best effort. Delivery failure never
//! fails a send; the durable store is the source of truth and pull-based
//! conversation reads are the reliable path.

pub mod registry;
pub mod ws;

use serde::Serialize;

use crate::messaging::Message;

pub use registry::{ChannelRegistry, LiveEndpoint};
pub use ws::ws_endpoint;

/// Payload pushed over a live channel
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PushEvent {
    /// A message addressed to the channel's identity was just persisted
    NewMessage { message: Message },
}
