use once_cell::sync::Lazy;

use super::{Field, FieldErrors, Validator};
use crate::auth::Credentials;

static LOGIN_RULES: Lazy<Validator> = Lazy::new(Validator::login);

/// Sign-in form state.
///
/// Errors stay hidden until the first submit attempt. From then on every edit
/// re-validates the edited field, so a message disappears as soon as the
/// value passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    email: String,
    password: String,
    errors: FieldErrors,
    submitted: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn was_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if self.submitted {
            match LOGIN_RULES.validate_field(field, &value) {
                Some(message) => self.errors.insert(field, message),
                None => self.errors.remove(field),
            }
        }
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    /// Validate every field; credentials are produced only when all pass.
    pub fn try_submit(&mut self) -> Option<Credentials> {
        self.submitted = true;
        self.errors = LOGIN_RULES.validate(&[
            (Field::Email, self.email.as_str()),
            (Field::Password, self.password.as_str()),
        ]);

        if self.errors.is_empty() {
            Some(Credentials::new(self.email.clone(), self.password.clone()))
        } else {
            tracing::debug!(errors = self.errors.len(), "sign-in form rejected");
            None
        }
    }
}
