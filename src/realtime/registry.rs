/**
 * Live Channel Registry
 *
 * The one piece of genuinely shared mutable in-memory state: a map from
 * identity id to the currently open delivery endpoint. Every mutation is
 * serialized behind a single mutex.
 *
 * # Binding Rules
 *
 * - At most one binding per identity; a new connect replaces any prior
 *   binding (last writer wins). The replaced endpoint is not closed here,
 *   the registry merely stops routing to it.
 * - Disconnect removes a binding only when the caller's endpoint id
 *   matches the registered one, so a stale disconnect from a replaced
 *   endpoint cannot evict a newer binding.
 * - A failed push evicts the binding and reports the miss to the caller;
 *   it is never retried or queued.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use uuid::Uuid;

use super::PushEvent;

struct Binding {
    endpoint_id: Uuid,
    tx: mpsc::UnboundedSender<PushEvent>,
}

/// Receiver half handed to a freshly connected channel task
pub struct LiveEndpoint {
    /// Identifies this binding; required for disconnect
    pub endpoint_id: Uuid,
    /// Events routed to this identity
    pub rx: mpsc::UnboundedReceiver<PushEvent>,
}

/// Identity -> live endpoint map, shared across all request tasks
#[derive(Clone, Default)]
pub struct ChannelRegistry {
    bindings: Arc<Mutex<HashMap<Uuid, Binding>>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an identity to a new endpoint, replacing any prior binding
    pub fn connect(&self, user_id: Uuid) -> LiveEndpoint {
        let endpoint_id = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();

        let replaced = self
            .bindings
            .lock()
            .expect("registry mutex poisoned")
            .insert(user_id, Binding { endpoint_id, tx });

        if replaced.is_some() {
            tracing::debug!(%user_id, "live channel binding replaced");
        }

        LiveEndpoint { endpoint_id, rx }
    }

    /// Remove the binding for `user_id`, but only if it still belongs to
    /// `endpoint_id`. Returns whether a binding was removed.
    pub fn disconnect(&self, user_id: Uuid, endpoint_id: Uuid) -> bool {
        let mut bindings = self.bindings.lock().expect("registry mutex poisoned");
        match bindings.get(&user_id) {
            Some(binding) if binding.endpoint_id == endpoint_id => {
                bindings.remove(&user_id);
                true
            }
            _ => false,
        }
    }

    /// Best-effort push to the identity's live endpoint.
    ///
    /// Returns true if the event was handed to a live endpoint. A send
    /// onto a dead endpoint evicts the binding and returns false; the
    /// caller treats both a missing and a dead endpoint the same way.
    pub fn push(&self, user_id: Uuid, event: PushEvent) -> bool {
        let mut bindings = self.bindings.lock().expect("registry mutex poisoned");
        let Some(binding) = bindings.get(&user_id) else {
            return false;
        };

        if binding.tx.send(event).is_ok() {
            true
        } else {
            bindings.remove(&user_id);
            tracing::debug!(%user_id, "evicted dead live channel binding");
            false
        }
    }

    /// Whether an identity currently has a live binding
    pub fn is_connected(&self, user_id: Uuid) -> bool {
        self.bindings
            .lock()
            .expect("registry mutex poisoned")
            .contains_key(&user_id)
    }
}
