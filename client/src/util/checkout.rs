//! Hand-off to the hosted payment checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The booking page creates a checkout session through the marketplace API
//! and then leaves the app. When the session carries a hosted `url` the
//! browser simply navigates there; otherwise Stripe.js (loaded by the shell)
//! performs `redirectToCheckout` with the configured publishable key.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use crate::net::types::CheckoutSession;

/// Why the redirect did not happen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("no checkout url and no publishable key configured")]
    NotConfigured,
    #[error("checkout redirect failed: {0}")]
    Redirect(String),
}

/// Where a checkout session sends the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutTarget {
    /// Full page navigation to the hosted payment page.
    HostedPage(String),
    /// Stripe.js `redirectToCheckout` with the publishable key.
    StripeJs { key: String, session_id: String },
}

/// What the caller should do after a successful hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The browser is navigating to the hosted page; the app must not
    /// navigate on top of it.
    LeavingApp,
    /// Stripe.js resolved without an error.
    Completed,
}

impl CheckoutTarget {
    pub fn outcome(&self) -> CheckoutOutcome {
        match self {
            Self::HostedPage(_) => CheckoutOutcome::LeavingApp,
            Self::StripeJs { .. } => CheckoutOutcome::Completed,
        }
    }
}

/// Pick the checkout route for `session`. A hosted url wins over Stripe.js.
///
/// # Errors
///
/// [`CheckoutError::NotConfigured`] when the session has no url and no
/// publishable key is set.
pub fn checkout_target(session: &CheckoutSession, key: Option<&str>) -> Result<CheckoutTarget, CheckoutError> {
    if let Some(url) = session.url.as_deref().filter(|url| !url.is_empty()) {
        return Ok(CheckoutTarget::HostedPage(url.to_owned()));
    }
    let key = key.ok_or(CheckoutError::NotConfigured)?;
    Ok(CheckoutTarget::StripeJs { key: key.to_owned(), session_id: session.id.clone() })
}

#[cfg(feature = "hydrate")]
mod stripe_js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Stripe;

        #[wasm_bindgen(js_name = Stripe, catch)]
        pub fn new_stripe(key: &str) -> Result<Stripe, JsValue>;

        #[wasm_bindgen(method, js_name = redirectToCheckout)]
        pub fn redirect_to_checkout(this: &Stripe, options: &JsValue) -> js_sys::Promise;
    }
}

/// Send the browser to the checkout page for `session`.
///
/// # Errors
///
/// Returns an error when neither a hosted url nor a publishable key is
/// available, or when the redirect reports an error.
pub async fn redirect_to_checkout(session: &CheckoutSession) -> Result<CheckoutOutcome, CheckoutError> {
    #[cfg(feature = "hydrate")]
    {
        let target = checkout_target(session, crate::util::config::stripe_publishable_key())?;
        let outcome = target.outcome();
        match target {
            CheckoutTarget::HostedPage(url) => {
                let window = web_sys::window().ok_or_else(|| CheckoutError::Redirect("no window".to_owned()))?;
                window
                    .location()
                    .set_href(&url)
                    .map_err(|e| CheckoutError::Redirect(format!("{e:?}")))?;
            }
            CheckoutTarget::StripeJs { key, session_id } => {
                let stripe = stripe_js::new_stripe(&key).map_err(|e| CheckoutError::Redirect(format!("{e:?}")))?;

                let options = js_sys::Object::new();
                let _ = js_sys::Reflect::set(
                    &options,
                    &wasm_bindgen::JsValue::from_str("sessionId"),
                    &wasm_bindgen::JsValue::from_str(&session_id),
                );
                let result = wasm_bindgen_futures::JsFuture::from(stripe.redirect_to_checkout(&options))
                    .await
                    .map_err(|e| CheckoutError::Redirect(format!("{e:?}")))?;

                let error = js_sys::Reflect::get(&result, &wasm_bindgen::JsValue::from_str("error"))
                    .ok()
                    .filter(|e| !e.is_undefined() && !e.is_null());
                if let Some(error) = error {
                    let message = js_sys::Reflect::get(&error, &wasm_bindgen::JsValue::from_str("message"))
                        .ok()
                        .and_then(|m| m.as_string())
                        .unwrap_or_else(|| "unknown error".to_owned());
                    return Err(CheckoutError::Redirect(message));
                }
            }
        }
        Ok(outcome)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(CheckoutError::Redirect("not available outside the browser".to_owned()))
    }
}
