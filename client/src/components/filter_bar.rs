//! Search, category, and "More Filters" panel above the listings.
//!
//! Search text and the panel inputs edit the draft filters; nothing narrows
//! the results until "Apply Filters". Category and sort apply immediately.

use leptos::prelude::*;

use crate::state::listings::{ListingFilters, ListingsState, SortBy};

fn draft_input(
    listings: RwSignal<ListingsState>,
    read: fn(&ListingFilters) -> &String,
    write: fn(&mut ListingFilters) -> &mut String,
) -> (impl Fn() -> String + Copy, impl Fn(leptos::ev::Event) + Copy) {
    let value = move || listings.with(|l| read(&l.draft).clone());
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        listings.update(|l| *write(&mut l.draft) = next);
    };
    (value, on_input)
}

/// Filter controls bound to the page's listings state.
#[component]
pub fn FilterBar(listings: RwSignal<ListingsState>) -> impl IntoView {
    let (search, on_search) = draft_input(listings, |f| &f.search, |f| &mut f.search);
    let (min_price, on_min_price) = draft_input(listings, |f| &f.min_price, |f| &mut f.min_price);
    let (max_price, on_max_price) = draft_input(listings, |f| &f.max_price, |f| &mut f.max_price);
    let (location, on_location) = draft_input(listings, |f| &f.location, |f| &mut f.location);

    let on_category = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let category = raw.parse::<i64>().ok();
        listings.update(|l| l.select_category(category));
    };
    let on_sort = move |ev: leptos::ev::Event| {
        let sort = SortBy::from_value(&event_target_value(&ev));
        listings.update(|l| l.set_sort(sort));
    };

    let category_options = move || {
        listings
            .get()
            .categories
            .into_iter()
            .map(|c| {
                let selected = listings.get_untracked().selected_category == Some(c.id);
                view! { <option value=c.id.to_string() selected=selected>{c.name}</option> }
            })
            .collect_view()
    };
    let sort_options = move || {
        SortBy::ALL
            .into_iter()
            .map(|sort| {
                view! {
                    <option value=sort.value() selected=move || listings.get().sort_by == sort>
                        {sort.label()}
                    </option>
                }
            })
            .collect_view()
    };

    view! {
        <section class="filter-bar">
            <div class="filter-bar__row">
                <input
                    class="filter-bar__search"
                    type="text"
                    placeholder="Search for anything..."
                    prop:value=search
                    on:input=on_search
                />
                <select
                    class="filter-bar__select"
                    on:change=on_category
                    prop:value=move || {
                        listings.get().selected_category.map(|id| id.to_string()).unwrap_or_default()
                    }
                >
                    <option value="">"All Categories"</option>
                    {category_options}
                </select>
                <button
                    class="btn btn--primary"
                    on:click=move |_| listings.update(|l| l.show_filters = !l.show_filters)
                >
                    "More Filters"
                </button>
            </div>
            <Show when=move || listings.get().show_filters>
                <div class="filter-bar__panel">
                    <label class="filter-bar__field">
                        <span>"Min Price"</span>
                        <input type="number" placeholder="$0" prop:value=min_price on:input=on_min_price/>
                    </label>
                    <label class="filter-bar__field">
                        <span>"Max Price"</span>
                        <input type="number" placeholder="$100" prop:value=max_price on:input=on_max_price/>
                    </label>
                    <label class="filter-bar__field">
                        <span>"Location"</span>
                        <input type="text" placeholder="City or ZIP" prop:value=location on:input=on_location/>
                    </label>
                    <label class="filter-bar__field">
                        <span>"Sort By"</span>
                        <select on:change=on_sort>{sort_options}</select>
                    </label>
                    <div class="filter-bar__actions">
                        <button class="btn" on:click=move |_| listings.update(ListingsState::reset_filters)>
                            "Reset"
                        </button>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| listings.update(ListingsState::apply_filters)
                        >
                            "Apply Filters"
                        </button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
