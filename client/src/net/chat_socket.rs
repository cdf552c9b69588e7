//! Item chat websocket.
//!
//! One socket per chat page. Outgoing frames go through an unbounded channel
//! drained by the send half; incoming text frames are decoded and appended to
//! the page's [`ChatState`]. The socket is not reopened after it drops.
//!
//! All socket logic is gated behind `#[cfg(feature = "hydrate")]`.

#[cfg(test)]
#[path = "chat_socket_test.rs"]
mod chat_socket_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{ChatMessage, IncomingSocketMessage};
use crate::net::types::OutgoingSocketMessage;
#[cfg(feature = "hydrate")]
use crate::state::chat::{ChatState, SocketStatus};
#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

/// Decode one incoming text frame. Frames without a `message` object yield
/// `None`.
#[cfg(any(test, feature = "hydrate"))]
pub fn parse_incoming(text: &str) -> Option<ChatMessage> {
    serde_json::from_str::<IncomingSocketMessage>(text)
        .ok()
        .map(|frame| frame.message)
}

/// Handle for pushing frames onto an open chat socket.
#[derive(Clone, Default)]
pub struct ChatSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl ChatSender {
    /// Queue a frame. Returns `false` when the socket is gone.
    pub fn send(&self, message: &OutgoingSocketMessage) -> bool {
        let Ok(text) = serde_json::to_string(message) else {
            return false;
        };
        #[cfg(feature = "hydrate")]
        {
            self.tx.as_ref().is_some_and(|tx| tx.unbounded_send(text).is_ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
            false
        }
    }

    /// Close the outgoing channel, which ends the socket task.
    pub fn close(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(tx) = &self.tx {
            tx.close_channel();
        }
    }
}

/// Open the chat socket for `item_id` and feed incoming messages into `chat`.
#[cfg(feature = "hydrate")]
pub fn open_chat_socket(item_id: &str, chat: RwSignal<ChatState>) -> ChatSender {
    let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
    let url = super::api::chat_socket_url(item_id);

    chat.update(|c| c.status = SocketStatus::Connecting);
    leptos::task::spawn_local(async move {
        match run_socket(&url, chat, rx).await {
            Ok(()) => leptos::logging::log!("chat socket closed"),
            Err(e) => leptos::logging::warn!("chat socket error: {e}"),
        }
        chat.update(|c| c.status = SocketStatus::Closed);
    });

    ChatSender { tx: Some(tx) }
}

#[cfg(feature = "hydrate")]
async fn run_socket(
    url: &str,
    chat: RwSignal<ChatState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();
    chat.update(|c| c.status = SocketStatus::Open);

    let send_task = async {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match parse_incoming(&text) {
                    Some(message) => chat.update(|c| c.push(message)),
                    None => leptos::logging::warn!("chat socket: skipping malformed frame"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("chat socket recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    let ws = ws_write.reunite(ws_read).map_err(|e| e.to_string())?;
    ws.close(None, None).map_err(|e| e.to_string())
}
