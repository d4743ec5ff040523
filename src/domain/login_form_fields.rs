use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::login_email::LoginEmail;

pub const PASSWORD_REQUIRED: &str = "password is a required field";

/// Form input exactly as the browser sent it. Missing fields deserialize to
/// empty strings so that they surface as validation errors instead of
/// extractor rejections.
#[derive(Deserialize)]
pub struct LoginFormData {
    #[serde(default)]
    pub email: String,
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

impl LoginFormData {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Secret::new(password.into()),
        }
    }

    /// Checks every field and reports all violations at once.
    pub fn validate(self) -> Result<LoginFormFields, FieldErrors> {
        let email = LoginEmail::parse(self.email);
        let password_missing = self.password.expose_secret().is_empty();
        match email {
            Ok(email) if !password_missing => Ok(LoginFormFields {
                email,
                password: self.password,
            }),
            email => Err(FieldErrors {
                email: email.err().map(|e| e.to_string()),
                password: password_missing.then(|| PASSWORD_REQUIRED.to_string()),
            }),
        }
    }
}

/// Credentials that passed validation and may be sent to the backend.
#[derive(Clone, Debug)]
pub struct LoginFormFields {
    pub email: LoginEmail,
    pub password: Secret<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}
