//! Read-only and interactive five-star widgets.

#[cfg(test)]
#[path = "star_rating_test.rs"]
mod star_rating_test;

use leptos::prelude::*;

use crate::state::listings::half_star_rating;

/// Fill of a single star.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

/// Five star fills for `rating`, rounded to the nearest half.
pub fn star_fills(rating: f64) -> [StarFill; 5] {
    let rounded = half_star_rating(rating.clamp(0.0, 5.0));
    std::array::from_fn(|i| {
        #[allow(clippy::cast_precision_loss)]
        let position = (i + 1) as f64;
        if rounded >= position {
            StarFill::Full
        } else if rounded + 0.5 >= position {
            StarFill::Half
        } else {
            StarFill::Empty
        }
    })
}

fn glyph(fill: StarFill) -> &'static str {
    match fill {
        StarFill::Full => "★",
        StarFill::Half => "⯪",
        StarFill::Empty => "☆",
    }
}

/// Mean rating display with review count.
#[component]
pub fn StarRating(rating: f64, review_count: usize) -> impl IntoView {
    let stars = star_fills(rating)
        .into_iter()
        .map(|fill| view! { <span class="stars__star">{glyph(fill)}</span> })
        .collect_view();

    view! {
        <span class="stars" title=format!("{rating:.1} out of 5")>
            {stars}
            <span class="stars__count">{format!("({review_count})")}</span>
        </span>
    }
}

/// Clickable 1-5 picker bound to `value`.
#[component]
pub fn StarPicker(value: RwSignal<Option<u8>>) -> impl IntoView {
    let stars = (1_u8..=5)
        .map(|n| {
            view! {
                <button
                    type="button"
                    class="stars__pick"
                    class:stars__pick--on=move || value.get().is_some_and(|v| v >= n)
                    aria-label=format!("{n} stars")
                    on:click=move |_| value.set(Some(n))
                >
                    "★"
                </button>
            }
        })
        .collect_view();

    view! { <span class="stars stars--picker">{stars}</span> }
}
