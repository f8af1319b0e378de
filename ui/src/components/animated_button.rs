use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Specialty,
    Cta,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Secondary => "button--secondary",
            ButtonVariant::Specialty => "button--specialty",
            ButtonVariant::Cta => "button--cta",
            ButtonVariant::Outline => "button--outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "button--sm",
            ButtonSize::Md => "button--md",
            ButtonSize::Lg => "button--lg",
        }
    }
}

/// Stateless button with the site's hover/press animation.
#[component]
pub fn AnimatedButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] class: String,
    #[props(default = "button".to_string())] kind: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "{kind}",
            class: "button button--animated {variant.class()} {size.class()} {class}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick.as_ref() {
                    handler.call(evt);
                }
            },
            span { class: "button__label", {children} }
        }
    }
}
