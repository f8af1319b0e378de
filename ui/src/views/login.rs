use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::future::{AbortHandle, Abortable};

use crate::auth::{submit_login, SimulatedAuthenticator, Submission, SubmissionState};
use crate::components::{AnimatedButton, ButtonVariant};
use crate::core::config::SiteConfig;
use crate::core::storage::SessionStore;
use crate::forms::{Field, LoginForm};
use crate::notify::ToastQueue;

#[component]
pub fn Login() -> Element {
    let config = use_context::<SiteConfig>();
    let sessions = use_context::<SessionStore>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let nav = navigator();

    let mut form = use_signal(LoginForm::new);
    let mut submission = use_signal(Submission::default);

    // Abort handle of the request in flight. Leaving the page aborts it so a
    // late completion never persists, toasts or redirects.
    let in_flight = use_hook(|| Rc::new(RefCell::new(None::<AbortHandle>)));
    {
        let in_flight = in_flight.clone();
        use_drop(move || {
            if let Some(handle) = in_flight.borrow_mut().take() {
                tracing::debug!("aborting sign-in on unmount");
                handle.abort();
            }
        });
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(credentials) = form.with_mut(|f| f.try_submit()) else {
            return;
        };
        if let Err(err) = submission.with_mut(|s| s.begin()) {
            tracing::debug!(%err, "ignored submit");
            return;
        }

        let (handle, registration) = AbortHandle::new_pair();
        if let Some(stale) = in_flight.borrow_mut().replace(handle) {
            stale.abort();
        }

        let auth = SimulatedAuthenticator::new(config.submit_delay_ms);
        let sessions = sessions.clone();
        let booking_route = config.booking_route.clone();
        let nav = nav.clone();
        let in_flight = in_flight.clone();

        spawn(async move {
            let request = submit_login(
                &auth,
                &sessions,
                &toasts,
                &nav,
                &booking_route,
                credentials,
            );
            match Abortable::new(request, registration).await {
                Ok(outcome) => {
                    submission.with_mut(|s| s.finish(outcome.map(|_| ())));
                }
                Err(_aborted) => submission.with_mut(|s| s.cancel()),
            }
            in_flight.borrow_mut().take();
        });
    };

    let snapshot = form();
    let status = submission();
    let busy = status.is_busy();
    let blocked = busy || (snapshot.was_submitted() && !snapshot.errors().is_empty());
    let failure = match status.state() {
        SubmissionState::Failed(message) => Some(message.clone()),
        _ => None,
    };

    rsx! {
        section { class: "page page-login",
            div { class: "login-card",
                div { class: "login-card__header",
                    h2 { class: "login-card__title", "Sign in to Health Hub" }
                    p { class: "login-card__subtitle", "Enter your credentials to access your account" }
                }

                form { class: "login-form", novalidate: true, onsubmit: onsubmit,
                    FormField {
                        field: Field::Email,
                        label: "Email",
                        kind: "text",
                        placeholder: "example@email.com",
                        value: snapshot.value(Field::Email).to_string(),
                        error: snapshot.error(Field::Email),
                        disabled: busy,
                        oninput: move |value: String| form.with_mut(|f| f.set(Field::Email, value)),
                    }
                    FormField {
                        field: Field::Password,
                        label: "Password",
                        kind: "password",
                        placeholder: "••••••••",
                        value: snapshot.value(Field::Password).to_string(),
                        error: snapshot.error(Field::Password),
                        disabled: busy,
                        oninput: move |value: String| form.with_mut(|f| f.set(Field::Password, value)),
                    }

                    if let Some(message) = failure {
                        p { class: "login-form__alert", role: "alert", "{message}" }
                    }

                    AnimatedButton {
                        variant: ButtonVariant::Primary,
                        kind: "submit",
                        class: "login-form__submit",
                        disabled: blocked,
                        "{status.button_label()}"
                    }
                }

                div { class: "login-card__divider",
                    span { "Or continue with" }
                }
                div { class: "login-card__social",
                    AnimatedButton { variant: ButtonVariant::Outline, "Google" }
                    AnimatedButton { variant: ButtonVariant::Outline, "Facebook" }
                }
            }
        }
    }
}

#[component]
fn FormField(
    field: Field,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    value: String,
    #[props(!optional)] error: Option<&'static str>,
    disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    let id = field.name();
    let class = if error.is_some() {
        "form-field form-field--invalid"
    } else {
        "form-field"
    };

    rsx! {
        div { class: "{class}",
            label { class: "form-field__label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                name: "{id}",
                class: "form-field__input",
                r#type: "{kind}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                aria_invalid: if error.is_some() { "true" } else { "false" },
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                p { class: "form-field__error", "{message}" }
            }
        }
    }
}
