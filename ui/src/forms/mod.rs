//! Ordered field rules: every rule is a (field, predicate, message) triple and
//! rules are evaluated independently of each other.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

mod login;
pub use login::LoginForm;

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 6 characters";
pub const PASSWORD_MIN_CHARS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

pub type Check = fn(&str) -> bool;

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: Field,
    pub check: Check,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: Vec<Rule>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, field: Field, check: Check, message: &'static str) -> Self {
        self.rules.push(Rule {
            field,
            check,
            message,
        });
        self
    }

    /// Email grammar and minimum password length.
    pub fn login() -> Self {
        Self::new()
            .rule(Field::Email, is_valid_email, EMAIL_MESSAGE)
            .rule(Field::Password, has_min_password_length, PASSWORD_MESSAGE)
    }

    /// First failing rule for `field`, in declaration order.
    pub fn validate_field(&self, field: Field, value: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .filter(|rule| rule.field == field)
            .find(|rule| !(rule.check)(value))
            .map(|rule| rule.message)
    }

    pub fn validate(&self, values: &[(Field, &str)]) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for (field, value) in values {
            if let Some(message) = self.validate_field(*field, value) {
                errors.insert(*field, message);
            }
        }
        errors
    }
}

/// Messages keyed by the field they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// Local part of word chars plus `'+-.`, ending on a non-dot; dot-terminated
// domain labels; alphabetic TLD of two or more letters. Leading dots and
// consecutive dots are rejected separately.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

pub fn has_min_password_length(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        for email in [
            "a@b.com",
            "u@test.com",
            "first.last+tag@mail.example.org",
            "o'brien@clinic-one.co.uk",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "not-an-email",
            "a@b",
            "a@b.c",
            ".a@b.com",
            "a.@b.com",
            "a..b@c.com",
            "a@-b.com",
            "a b@c.com",
            "a@b..com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn email_rule_reports_exact_message() {
        let validator = Validator::login();
        assert_eq!(validator.validate_field(Field::Email, "a@b.com"), None);
        assert_eq!(
            validator.validate_field(Field::Email, "not-an-email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn password_rule_boundary() {
        let validator = Validator::login();
        assert_eq!(
            validator.validate_field(Field::Password, "abcde"),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(validator.validate_field(Field::Password, "abcdef"), None);
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        assert!(!has_min_password_length("ééééé"));
        assert!(has_min_password_length("éééééé"));
    }

    #[test]
    fn fields_fail_independently() {
        let errors = Validator::login().validate(&[
            (Field::Email, "not-an-email"),
            (Field::Password, "secret1"),
        ]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_MESSAGE));
        assert_eq!(errors.get(Field::Password), None);
    }

    #[test]
    fn first_failing_rule_wins() {
        let validator = Validator::new()
            .rule(Field::Password, |v| !v.is_empty(), "required")
            .rule(Field::Password, has_min_password_length, PASSWORD_MESSAGE);
        assert_eq!(validator.validate_field(Field::Password, ""), Some("required"));
        assert_eq!(
            validator.validate_field(Field::Password, "abc"),
            Some(PASSWORD_MESSAGE)
        );
    }
}
