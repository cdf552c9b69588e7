//! Blocking alerts and desktop notifications.
//!
//! ERROR HANDLING
//! ==============
//! User-facing failures end in a blocking `alert`. Every message is also
//! logged so non-browser builds still leave a trace.

/// Show a blocking alert dialog with `message`.
pub fn alert(message: &str) {
    leptos::logging::log!("alert: {message}");
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Show a desktop notification, asking for permission first if undecided.
pub fn notify(title: &str, body: &str) {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::NotificationPermission;

        match web_sys::Notification::permission() {
            NotificationPermission::Granted => show_notification(title, body),
            NotificationPermission::Denied => {}
            _ => {
                let title = title.to_owned();
                let body = body.to_owned();
                leptos::task::spawn_local(async move {
                    let Ok(promise) = web_sys::Notification::request_permission() else {
                        return;
                    };
                    let granted = wasm_bindgen_futures::JsFuture::from(promise)
                        .await
                        .ok()
                        .and_then(|v| v.as_string())
                        .is_some_and(|v| v == "granted");
                    if granted {
                        show_notification(&title, &body);
                    }
                });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, body);
    }
}

#[cfg(feature = "hydrate")]
fn show_notification(title: &str, body: &str) {
    let options = web_sys::NotificationOptions::new();
    options.set_body(body);
    if let Err(e) = web_sys::Notification::new_with_options(title, &options) {
        leptos::logging::warn!("notification failed: {e:?}");
    }
}
