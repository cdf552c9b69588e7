//! Username/password login.
//!
//! Exchanges credentials for a token pair, keeps the access token as the
//! session token, and returns to the listings.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::session::SessionState;

/// Credentials exactly as typed.
fn credentials(username: String, password: String) -> Credentials {
    Credentials { username, password }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let request = credentials(username.get_untracked(), password.get_untracked());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::obtain_token(&request).await {
                Ok(pair) => {
                    session.update(|s| s.sign_in(pair.access));
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    crate::util::dialog::alert("Invalid credentials");
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="form-page">
            <h1>"Login"</h1>
            <form class="form-card" on:submit=on_submit>
                <label class="form-card__field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-card__field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
            </form>
        </div>
    }
}
