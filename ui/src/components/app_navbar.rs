use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Link builders registered by the platform crate.
///
/// `ui` does not know each platform's `Route` enum, so the shells hand over
/// functions that wrap a label in a fully-typed `Link`:
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     login: |label| rsx!( Link { class: "navbar__link", to: Route::Login {}, "{label}" } ),
///     booking: |label| rsx!( Link { class: "navbar__link", to: Route::BookAppointment {}, "{label}" } ),
/// });
/// ```
///
/// Without a registered builder `AppNavbar` renders whatever `children` it is
/// given.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub login: fn(label: &str) -> Element,
    pub booking: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navbar builder already registered");
    }
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let links = NAV_BUILDER.get().map(|b| {
        let home = (b.home)("Home");
        let login = (b.login)("Sign in");
        let booking = (b.booking)("Book Appointment");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {login}
                {booking}
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", aria_hidden: "true" }
                    span { class: "navbar__brand-name", "Health Hub" }
                }

                if let Some(nav) = links {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
