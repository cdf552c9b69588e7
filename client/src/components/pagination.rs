//! Numbered pager under the listings grid.

use leptos::prelude::*;

/// Page buttons `1..=page_count`; `current` is 1-based.
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] page_count: Signal<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="pager" aria-label="Pagination">
            <button
                class="pager__step"
                disabled=move || current.get() <= 1
                on:click=move |_| on_select.run(current.get_untracked().saturating_sub(1).max(1))
            >
                "‹"
            </button>
            {move || {
                (1..=page_count.get())
                    .map(|page| {
                        view! {
                            <button
                                class="pager__page"
                                class:pager__page--active=move || current.get() == page
                                on:click=move |_| on_select.run(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pager__step"
                disabled=move || current.get() >= page_count.get()
                on:click=move |_| on_select.run(current.get_untracked() + 1)
            >
                "›"
            </button>
        </nav>
    }
}
