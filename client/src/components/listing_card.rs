//! Card for one listing in the grid view.

use leptos::prelude::*;

use super::star_rating::StarRating;
use crate::net::types::Item;

/// Image shown for listings without a photo.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

/// A listing card with booking, chat, edit, review, and delete actions.
#[component]
pub fn ListingCard(item: Item, on_delete: Callback<i64>) -> impl IntoView {
    let id = item.id;
    let photo = item.photo.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());
    let category = item.category.as_ref().map(|c| c.name.clone());
    let rating = item.average_rating();
    let review_count = item.reviews.len();
    let available = item.available;

    view! {
        <article class="listing-card">
            <div class="listing-card__media">
                <img class="listing-card__photo" src=photo alt=item.title.clone() loading="lazy"/>
                <Show when=move || !available>
                    <span class="listing-card__chip listing-card__chip--booked">"Currently Booked"</span>
                </Show>
                <span class="listing-card__price">{format!("${}/day", item.price)}</span>
            </div>
            <div class="listing-card__body">
                <h3 class="listing-card__title">{item.title.clone()}</h3>
                {category.map(|name| view! { <span class="listing-card__chip">{name}</span> })}
                <p class="listing-card__description">{item.description.clone()}</p>
                <p class="listing-card__location">{item.location.clone()}</p>
                <StarRating rating=rating review_count=review_count/>
            </div>
            <div class="listing-card__actions">
                <a class="btn btn--primary" href=format!("/book-item/{id}")>"Book Now"</a>
                <a class="btn" href=format!("/chat/{id}")>"Chat"</a>
                <a class="btn" href=format!("/edit-item/{id}")>"Edit"</a>
                <a class="btn" href=format!("/review-item/{id}")>"Review"</a>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </article>
    }
}
