//! Message list for the item chat page.
//!
//! DESIGN
//! ======
//! History and live socket frames land in the same list. History replaces the
//! list wholesale; socket frames append. There is no deduplication between
//! the socket echo and the REST history.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatMessage;

/// Lifecycle of the page's single chat socket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SocketStatus {
    #[default]
    Idle,
    Connecting,
    Open,
    Closed,
}

impl SocketStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Not connected",
            Self::Connecting => "Connecting...",
            Self::Open => "Connected",
            Self::Closed => "Disconnected",
        }
    }
}

/// Chat page state.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub status: SocketStatus,
}

impl ChatState {
    /// Replace the list with fetched history.
    pub fn load_history(&mut self, history: Vec<ChatMessage>) {
        self.messages = history;
    }

    /// Append one live message.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

/// Primary line for a message: `sender to receiver: content`.
pub fn message_line(message: &ChatMessage) -> String {
    format!("{} to {}: {}", message.sender, message.receiver, message.content)
}
