//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read the host's environment at runtime, so the API
//! location and the checkout publishable key are baked in at compile time via
//! `RENIT_API_BASE` / `RENIT_STRIPE_KEY`. The chat socket host is derived from
//! the API base so both always point at the same backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `RENIT_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Base URL of the marketplace REST API, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("RENIT_API_BASE")
        .map(|base| base.trim_end_matches('/'))
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
}

/// Publishable key for the hosted checkout, if one was configured.
pub fn stripe_publishable_key() -> Option<&'static str> {
    option_env!("RENIT_STRIPE_KEY").filter(|key| !key.trim().is_empty())
}

/// Map an HTTP(S) base URL onto the matching websocket scheme.
pub fn websocket_base(api_base: &str) -> String {
    if let Some(rest) = api_base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = api_base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        format!("ws://{api_base}")
    }
}
