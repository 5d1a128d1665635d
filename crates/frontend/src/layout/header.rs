use leptos::prelude::*;

/// Application title bar.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header__content">
                <span class="app-header__icon">"🛡"</span>
                <h1 class="app-header__title">"Threats Identifier"</h1>
            </div>
        </header>
    }
}
