use dioxus::prelude::*;

use crate::catalog::{CENTERS_IMAGE, SPECIALTIES};
use crate::components::{AnimatedButton, ButtonSize, ButtonVariant, SectionTitle};
use crate::media::{PreloadTracker, PreloadedImage};

#[component]
pub fn CentersOfExcellence() -> Element {
    let tracker = use_signal(|| PreloadTracker::for_items(&[CENTERS_IMAGE]));

    rsx! {
        section { id: "services", class: "section section--centers",
            div { class: "section__inner",
                SectionTitle {
                    title: "Centers of Excellence",
                    subtitle: "Our specialized departments offer cutting-edge treatments and exceptional care across a wide range of medical fields.",
                }

                div { class: "centers__layout",
                    figure { class: "centers__media",
                        PreloadedImage {
                            item: CENTERS_IMAGE,
                            tracker,
                            class: "media-frame--portrait",
                        }
                        figcaption { class: "centers__caption",
                            p { class: "centers__caption-title", "Advanced Medical Technology" }
                            p { class: "centers__caption-text", "State-of-the-art diagnostics and treatments" }
                        }
                    }

                    div { class: "centers__specialties fade-in", style: "animation-delay: 200ms",
                        div { class: "specialty-grid",
                            for (index, specialty) in SPECIALTIES.iter().enumerate() {
                                div {
                                    key: "{specialty.id}",
                                    class: "fade-in",
                                    style: "animation-delay: {200 + index * 100}ms",
                                    AnimatedButton {
                                        variant: ButtonVariant::Specialty,
                                        class: "specialty-grid__item",
                                        "{specialty.name}"
                                    }
                                }
                            }
                        }

                        div { class: "centers__cta fade-in", style: "animation-delay: 1100ms",
                            AnimatedButton { variant: ButtonVariant::Cta, size: ButtonSize::Lg,
                                "View All Specialties"
                            }
                        }
                    }
                }
            }
        }
    }
}
