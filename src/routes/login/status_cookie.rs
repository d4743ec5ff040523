use axum_extra::extract::{cookie::Cookie, SignedCookieJar};

use crate::login_form::{LoginForm, SubmissionStatus};

/// Marks a browser whose last login attempt was turned down by the backend.
pub const LOGIN_FAILED_COOKIE: &str = "_login_failed";

/// Rebuilds the form of the visitor from the signed status cookie.
pub fn restore_form(jar: &SignedCookieJar) -> LoginForm {
    match jar.get(LOGIN_FAILED_COOKIE) {
        Some(_) => LoginForm::after_failed_attempt(),
        None => LoginForm::new(),
    }
}

/// Stores the status of `form` for the next request. Only a failed attempt
/// leaves a cookie behind.
pub fn remember_status(jar: SignedCookieJar, form: &LoginForm) -> SignedCookieJar {
    match form.status() {
        SubmissionStatus::AuthenticationFailed => jar.add(
            Cookie::build((LOGIN_FAILED_COOKIE, "1"))
                .path("/")
                .http_only(true),
        ),
        SubmissionStatus::AwaitingInput | SubmissionStatus::Submitting => {
            jar.remove(Cookie::build(LOGIN_FAILED_COOKIE).path("/"))
        }
    }
}
