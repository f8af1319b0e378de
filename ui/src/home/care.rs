use dioxus::prelude::*;

use crate::catalog::{PATIENT_CARE_POINTS, TECHNOLOGY_POINTS};

#[component]
pub fn PatientCare() -> Element {
    rsx! {
        div { class: "care-panel",
            FeatureColumn {
                title: "Personalized Patient Care",
                body: "We believe in a patient-centered approach to healthcare, providing individualized treatment plans and personalized care for every patient. Our team works closely with you to understand your unique health needs and goals.",
                points: PATIENT_CARE_POINTS,
                delay_ms: 200,
            }
            FeatureColumn {
                title: "Advanced Medical Technology",
                body: "Our hospital is equipped with state-of-the-art medical technology and facilities to ensure accurate diagnoses and effective treatments. We continually invest in the latest medical innovations to provide the highest standard of care.",
                points: TECHNOLOGY_POINTS,
                delay_ms: 400,
            }
        }
    }
}

#[component]
fn FeatureColumn(
    title: &'static str,
    body: &'static str,
    points: &'static [&'static str],
    delay_ms: u32,
) -> Element {
    rsx! {
        div { class: "care-panel__column fade-in", style: "animation-delay: {delay_ms}ms",
            h3 { class: "care-panel__title", "{title}" }
            p { class: "care-panel__body", "{body}" }
            ul { class: "care-panel__points",
                for point in points.iter() {
                    li { key: "{point}", class: "care-panel__point",
                        svg {
                            class: "care-panel__check",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M5 13l4 4L19 7",
                            }
                        }
                        span { "{point}" }
                    }
                }
            }
        }
    }
}
