//! REST API helpers for the remote marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages log the error and decide
//! whether to alert. Nothing here retries or caches.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    Booking, BookingRequest, Category, ChatMessage, CheckoutSession, Credentials, Item, NewMessageRequest,
    ReviewRequest, SignupRequest, TokenPair,
};

#[cfg(feature = "hydrate")]
use super::types::ItemForm;
#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// Absolute URL for an API path on the configured backend.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", crate::util::config::api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn item_path(item_id: &str) -> String {
    format!("/api/items/{item_id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn messages_for_item_path(item_id: &str) -> String {
    format!("/api/messages/?item_id={item_id}")
}

/// Websocket URL for the chat room of `item_id`.
pub fn chat_socket_url(item_id: &str) -> String {
    let base = crate::util::config::websocket_base(crate::util::config::api_base());
    format!("{base}/ws/chat/{item_id}/")
}

/// `Authorization` header value for a stored token.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
}

#[cfg(feature = "hydrate")]
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match bearer_header(crate::util::storage::token().as_deref()) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn expect_ok(resp: &Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(ApiError::Status(resp.status())) }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = authorized(Request::get(&endpoint(path))).send().await.map_err(network)?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: DeserializeOwned>(path: &str, body: &B, auth: bool) -> Result<T, ApiError> {
    let builder = Request::post(&endpoint(path));
    let builder = if auth { authorized(builder) } else { builder };
    let resp = builder.json(body).map_err(network)?.send().await.map_err(network)?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json_unit<B: serde::Serialize>(path: &str, body: &B, auth: bool) -> Result<(), ApiError> {
    let builder = Request::post(&endpoint(path));
    let builder = if auth { authorized(builder) } else { builder };
    let resp = builder.json(body).map_err(network)?.send().await.map_err(network)?;
    expect_ok(&resp)
}

/// Fetch all categories from `GET /api/categories/`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/categories/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch all listings from `GET /api/items/`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_items() -> Result<Vec<Item>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/items/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one listing from `GET /api/items/{id}/`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_item(item_id: &str) -> Result<Item, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&item_path(item_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = item_id;
        Err(ApiError::Unavailable)
    }
}

/// Delete a listing via `DELETE /api/items/{id}/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn delete_item(item_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&item_path(&item_id.to_string()));
        let resp = authorized(Request::delete(&url)).send().await.map_err(network)?;
        expect_ok(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = item_id;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn item_form_data(form: &ItemForm, photo: Option<&web_sys::File>) -> Result<web_sys::FormData, ApiError> {
    let data = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    for (name, value) in form.text_fields() {
        data.append_with_str(name, &value)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }
    if let Some(file) = photo {
        data.append_with_blob_and_filename("photo", file, &file.name())
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }
    Ok(data)
}

/// Create a listing with a multipart `POST /api/items/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
#[cfg(feature = "hydrate")]
pub async fn create_item(form: &ItemForm, photo: Option<&web_sys::File>) -> Result<(), ApiError> {
    let data = item_form_data(form, photo)?;
    let resp = authorized(Request::post(&endpoint("/api/items/")))
        .body(data)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    expect_ok(&resp)
}

/// Update a listing with a multipart `PATCH /api/items/{id}/`.
///
/// The photo part is only sent when a new file was chosen.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
#[cfg(feature = "hydrate")]
pub async fn update_item(item_id: &str, form: &ItemForm, photo: Option<&web_sys::File>) -> Result<(), ApiError> {
    let data = item_form_data(form, photo)?;
    let resp = authorized(Request::patch(&endpoint(&item_path(item_id))))
        .body(data)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    expect_ok(&resp)
}

/// Exchange credentials for a token pair via `POST /api/token/`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn obtain_token(credentials: &Credentials) -> Result<TokenPair, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/token/", credentials, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Register a new account via `POST /api/signup/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn signup(request: &SignupRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json_unit("/api/signup/", request, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create a booking via `POST /api/bookings/`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn create_booking(request: &BookingRequest) -> Result<Booking, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/bookings/", request, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create a checkout session for a booking via `POST /api/create-checkout-session/`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn create_checkout_session(booking_id: i64) -> Result<CheckoutSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "booking_id": booking_id });
        post_json("/api/create-checkout-session/", &body, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = booking_id;
        Err(ApiError::Unavailable)
    }
}

/// Submit a review via `POST /api/reviews/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn submit_review(request: &ReviewRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json_unit("/api/reviews/", request, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch prior chat messages for an item from `GET /api/messages/?item_id=`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_messages(item_id: &str) -> Result<Vec<ChatMessage>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&messages_for_item_path(item_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = item_id;
        Err(ApiError::Unavailable)
    }
}

/// Persist a chat message via `POST /api/messages/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn post_message(request: &NewMessageRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json_unit("/api/messages/", request, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
