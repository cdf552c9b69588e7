//! Networking modules for the marketplace REST API and chat websocket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `chat_socket` owns the per-page chat websocket,
//! `error` is the shared failure type, and `types` defines the wire schema.

pub mod api;
pub mod chat_socket;
pub mod error;
pub mod types;
