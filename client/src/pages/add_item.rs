//! New listing form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::item_form::ItemFormFields;
use crate::net::types::{Category, ItemForm};

#[component]
pub fn AddItemPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(ItemForm::default());
    let categories = RwSignal::new(Vec::<Category>::new());
    let photo_ref = NodeRef::<leptos::html::Input>::new();
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_categories().await {
            Ok(list) => categories.set(list),
            Err(e) => leptos::logging::warn!("failed to load categories: {e}"),
        }
    });

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        {
            let photo = crate::components::item_form::selected_photo(photo_ref);
            let submitted = form.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_item(&submitted, photo.as_ref()).await {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("failed to add item: {e}");
                        crate::util::dialog::alert("Failed to add item");
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (navigate, photo_ref);
            busy.set(false);
        }
    });

    view! {
        <div class="form-page">
            <h1>"Add New Item"</h1>
            <ItemFormFields
                form=form
                categories=categories
                photo_ref=photo_ref
                submit_label="Add Item"
                busy=busy
                on_submit=on_submit
            />
        </div>
    }
}
