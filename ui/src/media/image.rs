use dioxus::prelude::*;

use super::{LoadState, MediaItem, PreloadTracker};
use crate::core::{config::SiteConfig, timing};

/// Image with a pulsing skeleton until its bytes arrive.
///
/// The `<img>` is always mounted (transparent until loaded) so the engine
/// starts fetching immediately. A retry re-mounts it under a new key.
#[component]
pub fn PreloadedImage(
    item: MediaItem,
    mut tracker: Signal<PreloadTracker>,
    #[props(default)] class: String,
) -> Element {
    let timeout_ms = use_context::<SiteConfig>().image_timeout_ms;
    let id = item.id;
    let attempt = use_memo(move || tracker.read().attempt(id));

    // Watchdog per attempt. Spawned tasks are owned by this scope and are
    // dropped with it, so an unmounted section never touches the tracker.
    use_effect(move || {
        let current = attempt();
        spawn(async move {
            timing::sleep_ms(timeout_ms).await;
            if tracker.with_mut(|t| t.time_out(id, current)) {
                tracing::warn!(id, "image load timed out");
            }
        });
    });

    let state = tracker.read().state(id);
    let image_class = if state == LoadState::Loaded {
        "media-frame__image media-frame__image--loaded"
    } else {
        "media-frame__image"
    };
    let skeleton_class = if state == LoadState::Failed {
        "media-frame__skeleton media-frame__skeleton--failed"
    } else {
        "media-frame__skeleton"
    };

    rsx! {
        div { class: "media-frame {class}",
            if state != LoadState::Loaded {
                div { class: "{skeleton_class}", aria_hidden: "true" }
            }

            for current in std::iter::once(attempt()) {
                img {
                    key: "{current}",
                    class: "{image_class}",
                    src: item.url,
                    alt: item.alt,
                    onload: move |_| {
                        if tracker.with_mut(|t| t.mark_loaded(id)) {
                            tracing::debug!(id, "image loaded");
                        }
                    },
                    onerror: move |_| {
                        if tracker.with_mut(|t| t.mark_failed(id)) {
                            tracing::warn!(id, url = item.url, "image failed to load");
                        }
                    },
                }
            }

            if state == LoadState::Failed {
                button {
                    r#type: "button",
                    class: "media-frame__retry",
                    onclick: move |_| {
                        tracker.with_mut(|t| t.retry(id));
                    },
                    "Retry image"
                }
            }
        }
    }
}
