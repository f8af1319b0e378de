//! Context shared by every platform shell.

use dioxus::prelude::*;

use crate::core::config::SiteConfig;
use crate::core::storage::{self, SessionStore};
use crate::notify::ToastQueue;

/// Provide the site configuration, the session store and the toast queue to
/// the whole tree. Call once at the top of the platform `App` component.
pub fn use_site_context(load: impl FnOnce() -> SiteConfig) -> SiteConfig {
    let config = use_context_provider(load);
    use_context_provider(|| SessionStore::new(storage::default_backend(), config.session_max_age()));
    use_context_provider(|| Signal::new(ToastQueue::default()));
    config
}
