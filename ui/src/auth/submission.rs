use super::{AuthError, Authenticator, Credentials, SIGNING_IN_LABEL, SIGN_IN_LABEL};
use crate::core::navigation::Navigate;
use crate::core::storage::{Session, SessionStore, StorageError};
use crate::notify::{Notify, Toast};

pub const SUCCESS_TITLE: &str = "Login successful";
pub const SUCCESS_DESCRIPTION: &str = "Welcome to Health Hub!";
pub const FAILURE_TITLE: &str = "Login failed";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("a sign-in request is already in progress")]
    InFlight,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("could not save your session: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Submission lifecycle: `Idle -> Submitting -> Succeeded | Failed`.
/// A failed attempt keeps the form's values and may be resubmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    state: SubmissionState,
}

impl Submission {
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_busy() {
            SIGNING_IN_LABEL
        } else {
            SIGN_IN_LABEL
        }
    }

    pub fn begin(&mut self) -> Result<(), SubmitError> {
        if self.is_busy() {
            return Err(SubmitError::InFlight);
        }
        tracing::debug!(from = ?self.state, "submission started");
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    /// Apply the outcome of the in-flight request. Ignored unless submitting.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) -> bool {
        if !self.is_busy() {
            return false;
        }
        self.state = match outcome {
            Ok(()) => SubmissionState::Succeeded,
            Err(err) => SubmissionState::Failed(err.to_string()),
        };
        true
    }

    /// The request was abandoned before it completed.
    pub fn cancel(&mut self) {
        if self.is_busy() {
            self.state = SubmissionState::Idle;
        }
    }

    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }
}

/// Authenticate, persist the session, announce the result and redirect.
///
/// On success exactly one success toast is emitted and exactly one navigation
/// to `booking_route` happens. On failure one error toast is emitted and
/// nothing is persisted or navigated.
pub async fn submit_login<A, N, V>(
    auth: &A,
    sessions: &SessionStore,
    notifier: &N,
    navigator: &V,
    booking_route: &str,
    credentials: Credentials,
) -> Result<Session, SubmitError>
where
    A: Authenticator,
    N: Notify + ?Sized,
    V: Navigate + ?Sized,
{
    let outcome = async {
        let session = auth.authenticate(&credentials).await?;
        sessions.set(&session)?;
        Ok::<_, SubmitError>(session)
    }
    .await;

    match outcome {
        Ok(session) => {
            tracing::info!("sign-in succeeded");
            notifier.notify(Toast::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION));
            navigator.navigate(booking_route);
            Ok(session)
        }
        Err(err) => {
            tracing::warn!(%err, "sign-in failed");
            notifier.notify(Toast::error(FAILURE_TITLE, err.to_string()));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_sign_in_label() {
        let submission = Submission::default();
        assert_eq!(submission.state(), &SubmissionState::Idle);
        assert_eq!(submission.button_label(), "Sign in");
    }

    #[test]
    fn begin_marks_busy_and_relabels() {
        let mut submission = Submission::default();
        submission.begin().unwrap();
        assert!(submission.is_busy());
        assert_eq!(submission.button_label(), "Signing in...");
    }

    #[test]
    fn double_begin_is_rejected() {
        let mut submission = Submission::default();
        submission.begin().unwrap();
        assert!(matches!(submission.begin(), Err(SubmitError::InFlight)));
    }

    #[test]
    fn failure_is_a_distinct_state_and_resubmittable() {
        let mut submission = Submission::default();
        submission.begin().unwrap();
        assert!(submission.finish(Err(AuthError::InvalidCredentials.into())));
        assert!(matches!(submission.state(), SubmissionState::Failed(msg) if msg.contains("incorrect")));
        assert!(!submission.is_busy());

        submission.begin().unwrap();
        assert!(submission.finish(Ok(())));
        assert_eq!(submission.state(), &SubmissionState::Succeeded);
    }

    #[test]
    fn finish_without_begin_is_ignored() {
        let mut submission = Submission::default();
        assert!(!submission.finish(Ok(())));
        assert_eq!(submission.state(), &SubmissionState::Idle);
    }

    #[test]
    fn cancel_returns_to_idle_only_when_busy() {
        let mut submission = Submission::default();
        submission.begin().unwrap();
        submission.cancel();
        assert_eq!(submission.state(), &SubmissionState::Idle);

        submission.begin().unwrap();
        submission.finish(Ok(()));
        submission.cancel();
        assert_eq!(submission.state(), &SubmissionState::Succeeded);
    }
}
