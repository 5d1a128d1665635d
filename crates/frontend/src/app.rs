use leptos::prelude::*;

use crate::domain::logs::ui::LogsPage;
use crate::layout::header::Header;
use crate::shared::notifications::{NotificationArea, NotificationService};

#[component]
pub fn App() -> impl IntoView {
    // Provide the notification sink to the whole app via context.
    provide_context(NotificationService::new());

    view! {
        <Header />
        <LogsPage />
        <NotificationArea />
    }
}
