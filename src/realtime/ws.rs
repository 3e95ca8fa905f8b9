/**
 * WebSocket Endpoint
 *
 * Handles `GET /ws?token=<jwt>`: validates the token, upgrades the
 * connection, and binds the identity to the socket in the channel
 * registry for the lifetime of the connection.
 *
 * The token rides in a query parameter because browsers cannot attach
 * headers to WebSocket handshakes. Inbound frames are treated as
 * keepalives and ignored; the binding is torn down (endpoint-keyed) when
 * the peer closes or the socket errors.
 */

use axum::{
    extract::{
        ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use uuid::Uuid;

use super::registry::{ChannelRegistry, LiveEndpoint};
use crate::error::ApiError;
use crate::middleware::auth::{identity_from_token, AuthUser};

/// Query parameters for the WebSocket handshake
#[derive(Debug, Deserialize)]
pub struct WsParams {
    token: String,
}

/// WebSocket upgrade handler
pub async fn ws_endpoint(
    State(registry): State<ChannelRegistry>,
    Query(params): Query<WsParams>,
    ws: WebSocketUpgrade,
) -> Result<Response, ApiError> {
    let AuthUser(user_id) = identity_from_token(&params.token)?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, registry, user_id)))
}

async fn handle_socket(socket: WebSocket, registry: ChannelRegistry, user_id: Uuid) {
    let LiveEndpoint {
        endpoint_id,
        mut rx,
    } = registry.connect(user_id);

    tracing::info!(%user_id, %endpoint_id, "live channel opened");

    let (mut sender, mut receiver) = socket.split();

    let mut push_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let payload = match serde_json::to_string(&event) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::error!("failed to serialize push event: {:?}", e);
                    continue;
                }
            };
            if sender.send(WsMessage::Text(payload.into())).await.is_err() {
                break;
            }
        }
    });

    // Inbound frames are keepalives; drain until the peer goes away.
    loop {
        tokio::select! {
            frame = receiver.next() => match frame {
                Some(Ok(WsMessage::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => continue,
            },
            _ = &mut push_task => break,
        }
    }

    push_task.abort();
    registry.disconnect(user_id, endpoint_id);

    tracing::info!(%user_id, %endpoint_id, "live channel closed");
}
