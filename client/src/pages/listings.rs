//! Marketplace landing page: filterable grid or map of all listings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches categories and items once on entry, then hands everything to
//! [`ListingsState`] for sorting, filtering, and paging. Deletion is
//! optimistic: the card disappears before the request is sent and a failed
//! request is only logged.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::filter_bar::FilterBar;
use crate::components::listing_card::ListingCard;
use crate::components::map_view::MapView;
use crate::components::pagination::Pagination;
use crate::state::listings::{ListingsState, ViewMode, results_label};

#[cfg(feature = "hydrate")]
fn load_listings(listings: RwSignal<ListingsState>) {
    leptos::task::spawn_local(async move {
        let (categories, items) =
            futures::future::join(crate::net::api::fetch_categories(), crate::net::api::fetch_items()).await;
        let categories = categories.unwrap_or_else(|e| {
            leptos::logging::warn!("failed to load categories: {e}");
            Vec::new()
        });
        let items = items.unwrap_or_else(|e| {
            leptos::logging::warn!("failed to load items: {e}");
            Vec::new()
        });
        listings.update(|l| l.finish_loading(categories, items));
    });
}

/// Listings page at `/`.
#[component]
pub fn ListingsPage() -> impl IntoView {
    let listings = RwSignal::new(ListingsState::default());

    #[cfg(feature = "hydrate")]
    load_listings(listings);

    let on_delete = Callback::new(move |item_id: i64| {
        listings.update(|l| {
            l.remove_item(item_id);
        });
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::delete_item(item_id).await {
                leptos::logging::warn!("failed to delete item {item_id}: {e}");
            }
        });
    });
    let on_page = Callback::new(move |page: usize| listings.update(|l| l.set_page(page)));

    let visible = Memo::new(move |_| listings.with(ListingsState::visible));
    let page_items = Memo::new(move |_| listings.with(ListingsState::page_items));
    let current_page = Signal::derive(move || listings.get().page);
    let page_count = Signal::derive(move || listings.with(ListingsState::page_count));

    let view_toggle = move |mode: ViewMode, label: &'static str| {
        view! {
            <button
                class="btn"
                class:btn--primary=move || listings.get().view_mode == mode
                on:click=move |_| listings.update(|l| l.view_mode = mode)
            >
                {label}
            </button>
        }
    };

    let results = move || {
        if visible.with(Vec::is_empty) {
            return view! {
                <div class="listings__empty">
                    <h3>"No items match your criteria"</h3>
                    <p>"Try adjusting your filters or search terms to find more options"</p>
                    <button class="btn btn--primary" on:click=move |_| listings.update(ListingsState::reset_filters)>
                        "Clear All Filters"
                    </button>
                </div>
            }
            .into_any();
        }
        match listings.with(|l| l.view_mode) {
            ViewMode::Grid => view! {
                <div class="listings__grid">
                    <For
                        each=move || page_items.get()
                        key=|item| item.id
                        children=move |item| view! { <ListingCard item=item on_delete=on_delete/> }
                    />
                </div>
            }
            .into_any(),
            ViewMode::Map => view! { <MapView items=visible/> }.into_any(),
        }
    };

    view! {
        <Show
            when=move || !listings.get().loading
            fallback=|| {
                view! {
                    <div class="listings__loading">
                        <span class="spinner"></span>
                        <p>"Loading amazing rentals for you..."</p>
                    </div>
                }
            }
        >
            <div class="listings">
                <header class="listings__hero">
                    <h1>"Find Your Perfect Rental"</h1>
                    <p>"Discover unique items available in your area"</p>
                </header>
                <FilterBar listings=listings/>
                <div class="listings__toolbar">
                    <h2>{move || results_label(visible.with(Vec::len))}</h2>
                    <div class="listings__views">
                        {view_toggle(ViewMode::Grid, "Grid View")}
                        {view_toggle(ViewMode::Map, "Map View")}
                    </div>
                </div>
                {results}
                <Show when=move || listings.with(ListingsState::shows_pager)>
                    <Pagination current=current_page page_count=page_count on_select=on_page/>
                </Show>
            </div>
        </Show>
    }
}
