//! Shared UI crate for Health Hub. Every view, section and piece of client
//! state lives here; the `web` and `desktop` crates only add routing and a
//! launcher.

use dioxus::prelude::*;

pub mod app;
pub mod auth;
pub mod carousel;
pub mod catalog;
pub mod core;
pub mod forms;
pub mod home;
pub mod media;
pub mod notify;
pub mod views;

pub mod components {
    // Navbar with platform-registered links (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod animated_button;
    pub use animated_button::{AnimatedButton, ButtonSize, ButtonVariant};

    mod section_title;
    pub use section_title::SectionTitle;
}

pub use app::use_site_context;
pub use notify::ToastHost;

/// Shared stylesheet for every shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
