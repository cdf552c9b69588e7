//! Star rating and comment for one item.

#[cfg(test)]
#[path = "review_item_test.rs"]
mod review_item_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::star_rating::StarPicker;
use crate::net::types::ReviewRequest;

/// Review payload. An unpicked rating is sent as `null`.
fn review_request(item: String, rating: Option<u8>, comment: String) -> ReviewRequest {
    ReviewRequest {
        item,
        rating: rating.filter(|r| (1..=5).contains(r)),
        comment,
    }
}

#[component]
pub fn ReviewItemPage() -> impl IntoView {
    let params = use_params_map();
    let item_id = move || params.read().get("id").unwrap_or_default();
    let navigate = use_navigate();
    let rating = RwSignal::new(None::<u8>);
    let comment = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let request = review_request(item_id(), rating.get_untracked(), comment.get_untracked());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_review(&request).await {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("review failed: {e}");
                    crate::util::dialog::alert("Failed to submit review");
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="form-page">
            <h1>"Add Review"</h1>
            <form class="form-card" on:submit=on_submit>
                <div class="form-card__field">
                    <span>"Rating"</span>
                    <StarPicker value=rating/>
                </div>
                <label class="form-card__field">
                    <span>"Comment"</span>
                    <textarea
                        rows="4"
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Submit Review"
                </button>
            </form>
        </div>
    }
}
