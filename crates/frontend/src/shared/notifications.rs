//! Transient notification banners.
//!
//! A context-provided queue of auto-dismissing messages rendered as a fixed
//! stack in the bottom-right corner. Every pushed notification disappears
//! on its own after [`DISMISS_AFTER_MS`]; nothing here replaces the main
//! view, failures are surfaced exclusively through these banners.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Display duration of a single notification.
pub const DISMISS_AFTER_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Success,
    Info,
    Warning,
    Error,
}

impl Intent {
    pub fn css_class(self) -> &'static str {
        match self {
            Intent::Success => "notification--success",
            Intent::Info => "notification--info",
            Intent::Warning => "notification--warning",
            Intent::Error => "notification--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub intent: Intent,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn items(&self) -> RwSignal<Vec<Notification>> {
        self.items
    }

    pub fn push(&self, intent: Intent, text: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.items.update(|items| {
            items.push(Notification {
                id,
                intent,
                text: text.into(),
            })
        });

        let items = self.items;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            items.update(|items| items.retain(|n| n.id != id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(Intent::Success, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(Intent::Info, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.push(Intent::Warning, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(Intent::Error, text);
    }
}

/// Fixed bottom-right stack rendering the queue.
#[component]
pub fn NotificationArea() -> impl IntoView {
    let service =
        use_context::<NotificationService>().expect("NotificationService not found in context");

    view! {
        <div class="notification-area">
            {move || {
                service
                    .items()
                    .get()
                    .into_iter()
                    .map(|n| {
                        view! {
                            <div class=format!("notification {}", n.intent.css_class())>
                                {n.text}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_maps_to_distinct_classes() {
        let classes = [
            Intent::Success.css_class(),
            Intent::Info.css_class(),
            Intent::Warning.css_class(),
            Intent::Error.css_class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
