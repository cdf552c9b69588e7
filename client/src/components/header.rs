//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session and UI state provided by the app root. Navigation swaps
//! between guest links and signed-in actions once the session has been read
//! from storage.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// App-wide header with brand, auth links, and theme toggle.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let signed_in = move || session.get().is_signed_in();

    let on_logout = move |_| {
        session.update(SessionState::sign_out);
        navigate("/login", leptos_router::NavigateOptions::default());
    };

    let on_toggle_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="app-header">
            <A href="/" attr:class="app-header__brand">
                "Renit"
            </A>
            <nav class="app-header__nav">
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <A href="/login" attr:class="app-header__link">"Login"</A>
                            <A href="/signup" attr:class="app-header__link app-header__link--primary">
                                "Sign Up"
                            </A>
                        }
                    }
                >
                    <A href="/add-item" attr:class="app-header__link">"Add Item"</A>
                    <button class="app-header__link" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
                <button
                    class="app-header__theme"
                    title="Toggle dark mode"
                    aria-label="Toggle dark mode"
                    on:click=on_toggle_theme
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
            </nav>
        </header>
    }
}
