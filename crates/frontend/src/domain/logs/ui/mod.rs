//! Root orchestrator of the log page.
//!
//! Owns the two pieces of state everything renders from (the record
//! collection and the loading flag) and performs the remote calls. The
//! rendering branch is picked by [`ViewState::derive`]; the presentational
//! components below only consume plain data.

pub mod extraction_section;
pub mod log_table;
pub mod spinner;

use contracts::domain::extraction::ExtractionOutcome;
use contracts::domain::log_record::LogRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::logs::api;
use crate::domain::logs::view_state::ViewState;
use crate::shared::notifications::NotificationService;
use extraction_section::ExtractionSection;
use log_table::LogTable;
use spinner::Spinner;

#[component]
pub fn LogsPage() -> impl IntoView {
    let (logs, set_logs) = signal(Vec::<LogRecord>::new());
    let (loading, set_loading) = signal(false);

    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");

    // Mount-time fetch and manual reload share this. A failed read keeps
    // whatever is currently displayed and only surfaces a banner; the
    // loading flag is never touched here, so a reload failure cannot blank
    // the table.
    let retrieve_logs = move || {
        spawn_local(async move {
            match api::fetch_saved_logs().await {
                Ok(saved) => set_logs.set(saved),
                Err(error) => {
                    leptos::logging::log!("Failed to retrieve logs: {}", error.0);
                    notifications.info("Error retrieving logs");
                }
            }
        });
    };

    let handle_extraction = move || {
        // Ignore requests while one is already in flight.
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);

        spawn_local(async move {
            match api::trigger_extraction().await {
                ExtractionOutcome::Success(extracted) => {
                    set_logs.set(extracted);
                    notifications.success("Logs Extracted!");
                }
                ExtractionOutcome::EmptyWarning => {
                    notifications.warning("There was no logs to extract.");
                }
                ExtractionOutcome::ExtractionFailure => {
                    notifications.error("Error while extracting logs!");
                }
                ExtractionOutcome::PersistenceFailure => {
                    notifications.error("Error saving logs in the database!");
                }
                ExtractionOutcome::TransportFailure => {
                    notifications.error("It was not possible to perform \"Extract Logs\" Action");
                }
            }
            // Unconditional on every branch so the page can never stay
            // locked in the loading view.
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        retrieve_logs();
    });

    view! {
        <main class="page">
            {move || match ViewState::derive(loading.get(), &logs.get()) {
                ViewState::Loading => view! { <Spinner /> }.into_any(),
                ViewState::EmptyPrompt => {
                    view! {
                        <ExtractionSection on_extract=Callback::new(move |_| handle_extraction()) />
                    }
                    .into_any()
                }
                ViewState::Table(rows) => {
                    view! {
                        <LogTable
                            logs=rows
                            on_reload=Callback::new(move |_| retrieve_logs())
                        />
                    }
                    .into_any()
                }
            }}
        </main>
    }
}
