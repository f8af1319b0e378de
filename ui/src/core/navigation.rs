//! Navigation capability used by flows that redirect on completion.
//!
//! `ui` never sees the platform `Route` enums, so redirects are expressed as
//! plain paths and resolved by the router of whichever shell is running.

use dioxus::prelude::Navigator;

pub trait Navigate {
    fn navigate(&self, route: &str);
}

impl Navigate for Navigator {
    fn navigate(&self, route: &str) {
        tracing::debug!(route, "navigating");
        if let Some(failure) = self.push(route.to_string()) {
            tracing::warn!(route, ?failure, "navigation failed");
        }
    }
}
