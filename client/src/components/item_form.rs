//! Add/edit item form shared by the add and edit pages.

use leptos::prelude::*;

use crate::net::types::{Category, ItemForm};

/// Photo chosen in the form's file input, if any.
#[cfg(feature = "hydrate")]
pub fn selected_photo(photo_ref: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    photo_ref.get_untracked()?.files()?.get(0)
}

/// Item fields plus category select and photo picker.
#[component]
pub fn ItemFormFields(
    form: RwSignal<ItemForm>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    photo_ref: NodeRef<leptos::html::Input>,
    #[prop(into)] submit_label: String,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    let category_options = move || {
        let selected = form.get().category_id;
        categories
            .get()
            .into_iter()
            .map(|c| view! { <option value=c.id.to_string() selected=selected == Some(c.id)>{c.name}</option> })
            .collect_view()
    };

    view! {
        <form class="item-form" on:submit=on_form_submit>
            <label class="item-form__field">
                <span>"Title"</span>
                <input
                    type="text"
                    prop:value=move || form.get().title
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
            </label>
            <label class="item-form__field">
                <span>"Description"</span>
                <textarea
                    rows="4"
                    prop:value=move || form.get().description
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="item-form__field">
                <span>"Location"</span>
                <input
                    type="text"
                    prop:value=move || form.get().location
                    on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                />
            </label>
            <label class="item-form__field">
                <span>"Price (per day)"</span>
                <input
                    type="number"
                    step="0.01"
                    prop:value=move || form.get().price
                    on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                />
            </label>
            <label class="item-form__field">
                <span>"Category"</span>
                <select on:change=move |ev| {
                    let category_id = event_target_value(&ev).parse::<i64>().ok();
                    form.update(|f| f.category_id = category_id);
                }>
                    <option value="">"Select Category"</option>
                    {category_options}
                </select>
            </label>
            <label class="item-form__field">
                <span>"Photo"</span>
                <input type="file" accept="image/*" node_ref=photo_ref/>
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {submit_label}
            </button>
        </form>
    }
}
