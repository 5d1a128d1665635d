use leptos::prelude::*;

/// Prompt shown when no records are saved yet, with the one-click
/// extraction trigger.
#[component]
pub fn ExtractionSection(on_extract: Callback<()>) -> impl IntoView {
    view! {
        <section class="extraction">
            <div class="extraction__panel">
                "It appears that there is no Logs Extracted. Do you want to extract the files?"
            </div>
            <button
                class="button button--primary extraction__button"
                on:click=move |_| on_extract.run(())
            >
                "Extract Log Files"
            </button>
        </section>
    }
}
