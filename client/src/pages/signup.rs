//! Account registration.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::SignupRequest;

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let request = SignupRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&request).await {
                Ok(()) => {
                    crate::util::dialog::alert("Signup successful! Please log in.");
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("signup failed: {e}");
                    crate::util::dialog::alert("Signup failed");
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="form-page">
            <h1>"Sign Up"</h1>
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
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-card__field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign Up"
                </button>
            </form>
        </div>
    }
}
