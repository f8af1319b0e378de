use dioxus::prelude::*;

#[component]
pub fn SectionTitle(
    title: String,
    subtitle: String,
    #[props(default = "section-title__highlight--blue".to_string())] highlight: String,
) -> Element {
    rsx! {
        div { class: "section-title",
            h2 { class: "section-title__heading",
                span { class: "section-title__highlight {highlight}", "{title}" }
            }
            p { class: "section-title__subtitle", "{subtitle}" }
        }
    }
}
