use std::fmt::Display;

use serde::Serialize;
use validator::validate_email;

#[derive(Debug, PartialEq, Eq)]
pub enum EmailValidationError {
    Empty,
    Malformed,
}

impl Display for EmailValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailValidationError::Empty => write!(f, "email is a required field"),
            EmailValidationError::Malformed => write!(f, "email must be a valid email"),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct LoginEmail(String);

impl LoginEmail {
    /// Checks the input as typed. Surrounding whitespace makes an address
    /// malformed, it is not stripped.
    pub fn parse(s: String) -> Result<LoginEmail, EmailValidationError> {
        if s.is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(EmailValidationError::Malformed)
        }
    }
}

impl AsRef<str> for LoginEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for LoginEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
