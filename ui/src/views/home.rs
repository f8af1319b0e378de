use dioxus::prelude::*;

use crate::components::{AnimatedButton, ButtonSize, ButtonVariant};
use crate::core::config::SiteConfig;
use crate::home::{CentersOfExcellence, DoctorsCare};

#[component]
pub fn Home() -> Element {
    let login_route = use_context::<SiteConfig>().login_route;

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                div { class: "hero__inner",
                    h1 { class: "hero__title", "Exceptional care, close to home" }
                    p { class: "hero__tagline",
                        "Specialists across nine centers of excellence, with appointments that fit your schedule."
                    }
                    Link { to: login_route,
                        AnimatedButton { variant: ButtonVariant::Cta, size: ButtonSize::Lg,
                            "Book an Appointment"
                        }
                    }
                }
            }

            CentersOfExcellence {}
            DoctorsCare {}
        }
    }
}
