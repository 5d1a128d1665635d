use leptos::prelude::*;

/// Centered progress indicator shown while an extraction is in flight.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="spinner__circle"></div>
            <span class="spinner__label">"Loading..."</span>
        </div>
    }
}
