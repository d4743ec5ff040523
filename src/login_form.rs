use crate::{
    domain::{FieldErrors, LoginFormData, LoginFormFields},
    login_client::LoginBackend,
};

pub const AUTHENTICATION_FAILED: &str = "Login and password do not match";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    AwaitingInput,
    Submitting,
    AuthenticationFailed,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    Invalid,
    AlreadySubmitting,
}

#[derive(Debug)]
pub enum SubmissionOutcome {
    Invalid,
    AlreadySubmitting,
    Authenticated,
    AuthenticationFailed(anyhow::Error),
}

impl From<SubmitRejected> for SubmissionOutcome {
    fn from(value: SubmitRejected) -> Self {
        match value {
            SubmitRejected::Invalid => SubmissionOutcome::Invalid,
            SubmitRejected::AlreadySubmitting => SubmissionOutcome::AlreadySubmitting,
        }
    }
}

/// State behind the login form: what the user typed last, which fields are
/// wrong and where the current submission stands.
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    status: SubmissionStatus,
    email: String,
    errors: FieldErrors,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The form as it looks right after the backend turned an attempt down.
    pub fn after_failed_attempt() -> Self {
        Self {
            status: SubmissionStatus::AuthenticationFailed,
            ..Self::default()
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Submitting is disabled while a request is in flight.
    pub fn is_interactive(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }

    pub fn failure_message(&self) -> Option<&'static str> {
        (self.status == SubmissionStatus::AuthenticationFailed).then_some(AUTHENTICATION_FAILED)
    }

    /// Validates the input and, if it holds, moves to `Submitting`.
    ///
    /// Validation failures only touch the field errors, never the status.
    pub fn begin_submit(
        &mut self,
        input: LoginFormData,
    ) -> Result<LoginFormFields, SubmitRejected> {
        if self.status == SubmissionStatus::Submitting {
            return Err(SubmitRejected::AlreadySubmitting);
        }
        self.email = input.email.clone();
        match input.validate() {
            Ok(fields) => {
                self.errors = FieldErrors::default();
                self.status = SubmissionStatus::Submitting;
                Ok(fields)
            }
            Err(errors) => {
                self.errors = errors;
                Err(SubmitRejected::Invalid)
            }
        }
    }

    /// Records how the in-flight request ended.
    pub fn complete(&mut self, result: Result<(), anyhow::Error>) -> SubmissionOutcome {
        debug_assert_eq!(self.status, SubmissionStatus::Submitting);
        match result {
            // What happens after a successful login is up to the caller.
            Ok(()) => SubmissionOutcome::Authenticated,
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Login backend rejected the submission",
                );
                self.status = SubmissionStatus::AuthenticationFailed;
                SubmissionOutcome::AuthenticationFailed(e)
            }
        }
    }

    /// Runs a whole submission: validation, one backend call, outcome.
    pub async fn submit<B>(&mut self, input: LoginFormData, backend: &B) -> SubmissionOutcome
    where
        B: LoginBackend + ?Sized,
    {
        let fields = match self.begin_submit(input) {
            Ok(fields) => fields,
            Err(rejected) => return rejected.into(),
        };
        let result = backend.login(&fields).await;
        self.complete(result)
    }
}
