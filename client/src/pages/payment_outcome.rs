//! Static pages the hosted checkout returns to.

use leptos::prelude::*;

#[component]
pub fn SuccessPage() -> impl IntoView {
    view! {
        <div class="form-page outcome outcome--success">
            <h1>"Payment Successful!"</h1>
            <p>"Your booking has been confirmed."</p>
            <a class="btn btn--primary" href="/">"Back to listings"</a>
        </div>
    }
}

#[component]
pub fn CancelPage() -> impl IntoView {
    view! {
        <div class="form-page outcome outcome--cancel">
            <h1>"Payment Canceled"</h1>
            <p>"Your booking was not completed."</p>
            <a class="btn" href="/">"Back to listings"</a>
        </div>
    }
}
