//! Simulated sign-in.
//!
//! There is no backend: [`SimulatedAuthenticator`] waits a configurable delay
//! and accepts any validated credentials. The [`Authenticator`] seam exists so
//! failures are a first-class outcome of the submission flow.

use std::future::Future;

use crate::core::{storage::Session, timing};

mod submission;
pub use submission::{submit_login, Submission, SubmissionState, SubmitError};

pub const SIGN_IN_LABEL: &str = "Sign in";
pub const SIGNING_IN_LABEL: &str = "Signing in...";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("the email or password is incorrect")]
    InvalidCredentials,

    #[error("the sign-in service is unreachable: {0}")]
    Unavailable(String),
}

pub trait Authenticator {
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Session, AuthError>>;
}

/// Accepts every request after a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedAuthenticator {
    pub delay_ms: u64,
}

impl SimulatedAuthenticator {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        timing::sleep_ms(self.delay_ms).await;
        tracing::debug!(delay_ms = self.delay_ms, "simulated authentication accepted");
        Ok(Session::new(credentials.email()))
    }
}
