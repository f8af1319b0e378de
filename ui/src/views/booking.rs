use dioxus::prelude::*;

use crate::components::{AnimatedButton, ButtonVariant};
use crate::core::config::SiteConfig;
use crate::core::navigation::Navigate;
use crate::core::storage::SessionStore;
use crate::notify::{Notify, Toast, ToastQueue};

/// Landing page after sign-in. Visitors without a session are pointed back to
/// the login page.
#[component]
pub fn BookAppointment() -> Element {
    let config = use_context::<SiteConfig>();
    let sessions = use_context::<SessionStore>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let nav = navigator();

    let mut session = use_signal({
        let sessions = sessions.clone();
        move || sessions.get()
    });

    let home_route = config.home_route.clone();
    let sign_out = move |_: MouseEvent| match sessions.clear() {
        Ok(()) => {
            session.set(None);
            toasts.notify(Toast::success("Signed out", "See you soon."));
            nav.navigate(&home_route);
        }
        Err(err) => {
            tracing::warn!(%err, "failed to clear session");
            toasts.notify(Toast::error("Sign out failed", err.to_string()));
        }
    };

    let current = session();

    rsx! {
        section { class: "page page-booking",
            h1 { "Book an Appointment" }

            if let Some(active) = current {
                div { class: "booking-card",
                    p { class: "booking-card__greeting",
                        "Signed in as "
                        strong { "{active.user_email}" }
                    }
                    p { class: "booking-card__body",
                        "Choose a specialty from our Centers of Excellence and our care team will reach out to confirm a time that works for you."
                    }
                    AnimatedButton {
                        variant: ButtonVariant::Outline,
                        onclick: sign_out,
                        "Sign out"
                    }
                }
            } else {
                div { class: "booking-card booking-card--locked",
                    p { class: "booking-card__body", "Please sign in to book an appointment." }
                    Link { to: config.login_route.clone(),
                        AnimatedButton { variant: ButtonVariant::Primary, "Sign in" }
                    }
                }
            }
        }
    }
}
