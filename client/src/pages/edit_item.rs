//! Edit an existing listing.
//!
//! Loads the item and the category list, pre-fills the shared form, and
//! submits a multipart PATCH. The stored photo is kept unless a new file is
//! chosen. If the item cannot be fetched the form is never shown, so a
//! failed load cannot be submitted as a blank PATCH.

#[cfg(test)]
#[path = "edit_item_test.rs"]
mod edit_item_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::item_form::ItemFormFields;
use crate::net::error::ApiError;
use crate::net::types::{Category, Item, ItemForm};

/// Progress of fetching the item being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
enum EditLoad {
    Loading,
    Ready,
    Failed(String),
}

impl EditLoad {
    fn can_submit(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Load state and pre-filled form for a fetch result.
fn edit_load(result: Result<Item, ApiError>) -> (EditLoad, Option<ItemForm>) {
    match result {
        Ok(item) => (EditLoad::Ready, Some(ItemForm::from_item(&item))),
        Err(e) => (EditLoad::Failed(e.to_string()), None),
    }
}

#[component]
pub fn EditItemPage() -> impl IntoView {
    let params = use_params_map();
    let item_id = move || params.read().get("id").unwrap_or_default();
    let navigate = use_navigate();
    let form = RwSignal::new(ItemForm::default());
    let categories = RwSignal::new(Vec::<Category>::new());
    let load = RwSignal::new(EditLoad::Loading);
    let photo_ref = NodeRef::<leptos::html::Input>::new();
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let id = item_id();
        leptos::task::spawn_local(async move {
            let (item, list) =
                futures::future::join(crate::net::api::fetch_item(&id), crate::net::api::fetch_categories()).await;
            match list {
                Ok(list) => categories.set(list),
                Err(e) => leptos::logging::warn!("failed to load categories: {e}"),
            }
            let (state, prefilled) = edit_load(item);
            if let EditLoad::Failed(e) = &state {
                leptos::logging::warn!("failed to load item {id}: {e}");
            }
            if let Some(prefilled) = prefilled {
                form.set(prefilled);
            }
            load.set(state);
        });
    }

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() || !load.with_untracked(EditLoad::can_submit) {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        let id = item_id();
        #[cfg(feature = "hydrate")]
        {
            let photo = crate::components::item_form::selected_photo(photo_ref);
            let submitted = form.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_item(&id, &submitted, photo.as_ref()).await {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("failed to update item {id}: {e}");
                        crate::util::dialog::alert("Failed to update item");
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (navigate, id, photo_ref);
            busy.set(false);
        }
    });

    view! {
        <div class="form-page">
            <h1>"Edit Item"</h1>
            {move || match load.get() {
                EditLoad::Loading => view! { <p class="form-page__status">"Loading item..."</p> }.into_any(),
                EditLoad::Failed(_) => {
                    view! { <p class="form-page__status form-page__status--error">"Could not load this item."</p> }
                        .into_any()
                }
                EditLoad::Ready => view! {
                    <ItemFormFields
                        form=form
                        categories=categories
                        photo_ref=photo_ref
                        submit_label="Save Changes"
                        busy=busy
                        on_submit=on_submit
                    />
                }
                .into_any(),
            }}
        </div>
    }
}
