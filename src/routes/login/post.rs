use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::SignedCookieJar;

use crate::{
    domain::LoginFormData,
    identity::IdentitySession,
    login_client::LoginClient,
    login_form::SubmissionOutcome,
    routes::LoginError,
};

use super::{
    page::render_login_page,
    status_cookie::{remember_status, restore_form},
};

#[tracing::instrument(
    name = "Log in with email and password",
    skip_all,
    fields(email = tracing::field::Empty)
)]
pub async fn submit_login(
    State(login_client): State<LoginClient>,
    identity: IdentitySession,
    jar: SignedCookieJar,
    Form(form_data): Form<LoginFormData>,
) -> axum::response::Result<Response> {
    tracing::Span::current().record("email", &tracing::field::display(&form_data.email));

    let mut form = restore_form(&jar);
    match form.submit(form_data, &login_client).await {
        SubmissionOutcome::Authenticated => {
            let jar = remember_status(jar, &form);
            Ok((jar, Redirect::to("/")).into_response())
        }
        SubmissionOutcome::Invalid => {
            let page = render_login_page(&form, &identity);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
        }
        SubmissionOutcome::AuthenticationFailed(e) => {
            let jar = remember_status(jar, &form);
            Err((jar, LoginError::AuthError(e)).into())
        }
        SubmissionOutcome::AlreadySubmitting => Err(LoginError::UnexpectedError(anyhow::anyhow!(
            "A restored login form reported an in-flight submission"
        ))
        .into()),
    }
}
