use dioxus::prelude::*;

use super::PatientCare;
use crate::carousel::Carousel;
use crate::catalog::{Doctor, DOCTORS};
use crate::components::{AnimatedButton, ButtonSize, ButtonVariant, SectionTitle};
use crate::core::config::SiteConfig;
use crate::media::{PreloadTracker, PreloadedImage};

#[component]
pub fn DoctorsCare() -> Element {
    let tracker = use_signal(|| PreloadTracker::new(DOCTORS.iter().map(|d| d.photo.id)));
    // The roster is static, so this branch is taken identically on every
    // render and hook order stays stable.
    let initial = match Carousel::new(DOCTORS.len()) {
        Ok(initial) => initial,
        Err(err) => {
            tracing::warn!(%err, "doctor carousel has nothing to show");
            return rsx! {};
        }
    };
    let mut carousel = use_signal(move || initial);

    let position = carousel();
    let current = position.current();

    rsx! {
        section { id: "doctors", class: "section section--doctors",
            div { class: "section__inner",
                SectionTitle {
                    title: "Our Expert Doctors",
                    subtitle: "Our team of highly skilled and experienced medical professionals is dedicated to providing personalized care and treatment.",
                    highlight: "section-title__highlight--orange",
                }

                div { class: "carousel",
                    div { class: "carousel__viewport",
                        div {
                            class: "carousel__track",
                            style: "transform: {position.transform()}",
                            for (index, doctor) in DOCTORS.iter().enumerate() {
                                DoctorCard {
                                    key: "{doctor.id}",
                                    doctor: *doctor,
                                    tracker,
                                    active: index == current,
                                }
                            }
                        }
                    }

                    div { class: "carousel__controls",
                        button {
                            r#type: "button",
                            class: "carousel__button",
                            aria_label: "Previous doctor",
                            onclick: move |_| carousel.with_mut(|c| c.previous()),
                            ChevronIcon { path: "m15 18-6-6 6-6" }
                        }
                        div { class: "carousel__dots",
                            for index in 0..position.len() {
                                button {
                                    key: "{index}",
                                    r#type: "button",
                                    class: if index == current { "carousel__dot carousel__dot--active" } else { "carousel__dot" },
                                    aria_label: "Show doctor {index + 1}",
                                    onclick: move |_| {
                                        if let Err(err) = carousel.with_mut(|c| c.go_to(index)) {
                                            tracing::debug!(%err, "ignored carousel jump");
                                        }
                                    },
                                }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "carousel__button",
                            aria_label: "Next doctor",
                            onclick: move |_| carousel.with_mut(|c| c.next()),
                            ChevronIcon { path: "m9 18 6-6-6-6" }
                        }
                    }
                }

                PatientCare {}
            }
        }
    }
}

#[component]
fn DoctorCard(doctor: Doctor, tracker: Signal<PreloadTracker>, active: bool) -> Element {
    let booking_route = use_context::<SiteConfig>().booking_route;

    rsx! {
        article {
            class: "carousel__item",
            aria_hidden: if active { "false" } else { "true" },
            div { class: "doctor-card",
                PreloadedImage {
                    item: doctor.photo,
                    tracker,
                    class: "doctor-card__photo",
                }
                div { class: "doctor-card__body",
                    span { class: "doctor-card__specialty", "{doctor.specialty}" }
                    h3 { class: "doctor-card__name", "{doctor.name}" }
                    p { class: "doctor-card__experience", "{doctor.experience}" }
                    p { class: "doctor-card__description", "{doctor.description}" }
                    div { class: "doctor-card__actions",
                        Link { to: booking_route,
                            AnimatedButton { variant: ButtonVariant::Secondary, size: ButtonSize::Sm,
                                "Book Appointment"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChevronIcon(path: &'static str) -> Element {
    rsx! {
        svg {
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "{path}" }
        }
    }
}
