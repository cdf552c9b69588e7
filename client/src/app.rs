//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Script, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{
    add_item::AddItemPage,
    book_item::BookItemPage,
    chat::ChatPage,
    edit_item::EditItemPage,
    listings::ListingsPage,
    login::LoginPage,
    payment_outcome::{CancelPage, SuccessPage},
    review_item::ReviewItemPage,
    signup::SignupPage,
};
use crate::state::{session::SessionState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides session and UI state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    // Storage is only readable after hydration.
    Effect::new(move || {
        session.set(SessionState::from_storage());
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/renit.css"/>
        <Script src="https://js.stripe.com/v3/"/>
        <Title text="Renit"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ListingsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("add-item") view=AddItemPage/>
                    <Route path=(StaticSegment("edit-item"), ParamSegment("id")) view=EditItemPage/>
                    <Route path=(StaticSegment("book-item"), ParamSegment("id")) view=BookItemPage/>
                    <Route path=(StaticSegment("review-item"), ParamSegment("id")) view=ReviewItemPage/>
                    <Route path=(StaticSegment("chat"), ParamSegment("itemId")) view=ChatPage/>
                    <Route path=StaticSegment("success") view=SuccessPage/>
                    <Route path=StaticSegment("cancel") view=CancelPage/>
                </Routes>
            </main>
        </Router>
    }
}
