//! Per-item chat between renter and owner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entering the page opens the item's chat socket and loads the stored
//! history once; leaving closes the socket. A sent message goes out over the
//! socket and is also persisted through the REST API, so the sender may see
//! it twice.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::chat_socket::ChatSender;
use crate::net::types::{NewMessageRequest, OutgoingSocketMessage};
use crate::state::chat::{ChatState, message_line};

const MISSING_RECEIVER: &str = "Please specify a receiver ID";

/// Socket frame and persist payload for one send. The receiver must be a
/// non-zero user id.
fn prepare_send(
    item_id: &str,
    content: &str,
    receiver_raw: &str,
) -> Result<(OutgoingSocketMessage, NewMessageRequest), &'static str> {
    let receiver = receiver_raw
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or(MISSING_RECEIVER)?;
    Ok((
        OutgoingSocketMessage { content: content.to_owned(), receiver_id: receiver },
        NewMessageRequest { item: item_id.to_owned(), receiver, content: content.to_owned() },
    ))
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let params = use_params_map();
    let item_id = move || params.read().get("itemId").unwrap_or_default();
    let chat = RwSignal::new(ChatState::default());
    let sender = StoredValue::new(ChatSender::default());
    let receiver = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let id = item_id();
        sender.set_value(crate::net::chat_socket::open_chat_socket(&id, chat));
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_messages(&id).await {
                Ok(history) => chat.update(|c| c.load_history(history)),
                Err(e) => leptos::logging::warn!("failed to load messages: {e}"),
            }
        });
    }
    on_cleanup(move || sender.with_value(ChatSender::close));

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = content.get_untracked();
        let (frame, request) = match prepare_send(&item_id(), &text, &receiver.get_untracked()) {
            Ok(payloads) => payloads,
            Err(message) => {
                crate::util::dialog::alert(message);
                return;
            }
        };
        if !sender.with_value(|s| s.send(&frame)) {
            leptos::logging::warn!("chat socket is not open; message not pushed");
        }
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::post_message(&request).await {
                leptos::logging::warn!("failed to store message: {e}");
            }
        });
        content.set(String::new());
    };

    view! {
        <div class="form-page chat-page">
            <h1>"Chat"</h1>
            <p class="chat-page__status">{move || chat.with(|c| c.status.label())}</p>
            <form class="form-card" on:submit=on_send>
                <label class="form-card__field">
                    <span>"Receiver ID (temporary)"</span>
                    <input
                        type="number"
                        prop:value=move || receiver.get()
                        on:input=move |ev| receiver.set(event_target_value(&ev))
                    />
                </label>
                <ul class="chat-page__messages">
                    {move || {
                        chat.get()
                            .messages
                            .iter()
                            .map(|msg| {
                                view! {
                                    <li class="chat-page__message">
                                        <span class="chat-page__line">{message_line(msg)}</span>
                                        <span class="chat-page__time">{msg.timestamp.clone().unwrap_or_default()}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <label class="form-card__field">
                    <span>"Message"</span>
                    <input
                        type="text"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit">
                    "Send"
                </button>
            </form>
        </div>
    }
}
