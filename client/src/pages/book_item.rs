//! Booking and checkout for one item.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two steps on one page: "Create Booking" posts the chosen window and keeps
//! the returned booking id; "Pay Now" then opens a checkout session for that
//! booking and leaves for the hosted payment page.

#[cfg(test)]
#[path = "book_item_test.rs"]
mod book_item_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::BookingRequest;
use crate::util::checkout::CheckoutOutcome;
use crate::util::datetime::local_to_iso;

/// Booking payload for the picked window. Unpicked or invalid times are
/// left out.
fn booking_request(item_id: String, start_raw: &str, end_raw: &str) -> BookingRequest {
    BookingRequest {
        item_id,
        start_time: local_to_iso(start_raw),
        end_time: local_to_iso(end_raw),
    }
}

#[component]
pub fn BookItemPage() -> impl IntoView {
    let params = use_params_map();
    let item_id = move || params.read().get("id").unwrap_or_default();
    let navigate = use_navigate();
    let start_time = RwSignal::new(String::new());
    let end_time = RwSignal::new(String::new());
    let booking_id = RwSignal::new(None::<i64>);
    let busy = RwSignal::new(false);

    let on_book = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let request = booking_request(item_id(), &start_time.get_untracked(), &end_time.get_untracked());
        leptos::task::spawn_local(async move {
            match crate::net::api::create_booking(&request).await {
                Ok(booking) => booking_id.set(Some(booking.id)),
                Err(e) => {
                    leptos::logging::warn!("booking failed: {e}");
                    crate::util::dialog::alert("Booking failed");
                }
            }
            busy.set(false);
        });
    };

    let on_pay = move |_| {
        let Some(id) = booking_id.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let session = match crate::net::api::create_checkout_session(id).await {
                Ok(session) => session,
                Err(e) => {
                    leptos::logging::warn!("checkout session failed: {e}");
                    busy.set(false);
                    return;
                }
            };
            match crate::util::checkout::redirect_to_checkout(&session).await {
                Ok(CheckoutOutcome::Completed) => {
                    crate::util::dialog::notify("Booking Confirmed!", "Your payment was successful.");
                    navigate("/success", NavigateOptions::default());
                }
                Ok(CheckoutOutcome::LeavingApp) => return,
                Err(e) => leptos::logging::warn!("{e}"),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="form-page">
            <h1>"Book Item"</h1>
            <div class="form-card">
                <label class="form-card__field">
                    <span>"Start Time"</span>
                    <input
                        type="datetime-local"
                        prop:value=move || start_time.get()
                        on:input=move |ev| start_time.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-card__field">
                    <span>"End Time"</span>
                    <input
                        type="datetime-local"
                        prop:value=move || end_time.get()
                        on:input=move |ev| end_time.set(event_target_value(&ev))
                    />
                </label>
                <Show
                    when=move || booking_id.get().is_some()
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" disabled=move || busy.get() on:click=on_book>
                                "Create Booking"
                            </button>
                        }
                    }
                >
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=on_pay.clone()>
                        "Pay Now"
                    </button>
                </Show>
            </div>
        </div>
    }
}
