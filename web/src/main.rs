use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::SiteConfig;
use ui::views::{BookAppointment, Home, Login};
use ui::ToastHost;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/book-appointment")]
    BookAppointment {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_login(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Login {},
        "{label}"
    })
}
fn nav_booking(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link navbar__link--cta",
        to: Route::BookAppointment {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::use_site_context(SiteConfig::load);
    register_nav(NavBuilder {
        home: nav_home,
        login: nav_login,
        booking: nav_booking,
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
        ToastHost {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
