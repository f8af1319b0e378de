use dioxus::prelude::*;

use super::{Toast, ToastQueue, ToastTone};
use crate::core::{config::SiteConfig, timing};

/// Renders queued toasts in a fixed corner region.
#[component]
pub fn ToastHost() -> Element {
    let queue = use_context::<Signal<ToastQueue>>();
    let toasts = queue.read().visible().to_vec();

    rsx! {
        div { class: "toast-region", role: "status", aria_live: "polite",
            for (id, toast) in toasts.into_iter() {
                ToastCard { key: "{id}", id, toast }
            }
        }
    }
}

#[component]
fn ToastCard(id: u64, toast: Toast) -> Element {
    let mut queue = use_context::<Signal<ToastQueue>>();
    let duration_ms = use_context::<SiteConfig>().toast_duration_ms;

    // Expiry timer lives as long as the card; a manual dismiss drops it.
    use_hook(move || {
        spawn(async move {
            timing::sleep_ms(duration_ms).await;
            queue.write().dismiss(id);
        })
    });

    let tone = match toast.tone {
        ToastTone::Success => "toast--success",
        ToastTone::Error => "toast--error",
    };

    rsx! {
        div { class: "toast {tone}",
            div { class: "toast__body",
                p { class: "toast__title", "{toast.title}" }
                p { class: "toast__description", "{toast.description}" }
            }
            button {
                r#type: "button",
                class: "toast__close",
                aria_label: "Dismiss notification",
                onclick: move |_| queue.write().dismiss(id),
                "×"
            }
        }
    }
}
