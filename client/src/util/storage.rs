//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token and the theme preference are the only values persisted
//! across page loads. These helpers centralize the hydrate-only web-sys glue;
//! on the server (and in native tests) reads return `None` and writes no-op.

/// Key under which the session token is stored.
pub const TOKEN_KEY: &str = "token";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a raw string value for `key`.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string value for `key`.
pub fn save(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` if present.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Current session token, read fresh on every call.
pub fn token() -> Option<String> {
    load(TOKEN_KEY).filter(|t| !t.is_empty())
}
