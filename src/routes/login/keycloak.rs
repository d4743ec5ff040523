use axum::{extract::State, response::Redirect};

use crate::{identity::IdentitySession, routes::LoginError, startup::ApplicationBaseUrl};

/// Hands the whole browser over to the identity provider. The form is not
/// involved and nothing is posted to the login backend.
#[tracing::instrument(name = "Delegate login to the identity provider", skip_all)]
pub async fn delegated_login(
    State(base_url): State<ApplicationBaseUrl>,
    identity: IdentitySession,
) -> Result<Redirect, LoginError> {
    let redirect_uri = format!("{}/", base_url.0.trim_end_matches('/'));
    let login_url = identity.create_login_url(&redirect_uri)?;
    Ok(Redirect::to(login_url.as_str()))
}
