//! Read-only view of the identity provider session.
//!
//! Every request gets its own [`IdentitySession`], restored from the cookies
//! the request carried. Handlers receive it as an extractor and never build or
//! mutate one themselves; the tokens are owned by the provider's adapter.

mod persistor;
mod token;

use std::convert::Infallible;

use anyhow::Context;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
};
use chrono::Utc;
use http::request::Parts;
use reqwest::Url;
use uuid::Uuid;

pub use persistor::*;
pub use token::ParsedToken;

use crate::{configuration::KeycloakSettings, session_bootstrap::parse_cookies};

#[derive(Debug, Clone)]
pub struct IdentitySession {
    settings: KeycloakSettings,
    token_parsed: Option<ParsedToken>,
    authenticated: bool,
}

impl IdentitySession {
    #[tracing::instrument(name = "Restore identity session", skip_all)]
    pub fn restore(settings: KeycloakSettings, persistor: &impl SessionPersistor) -> Self {
        let token_parsed = persistor
            .get_item(ACCESS_TOKEN_KEY)
            .and_then(|token| match ParsedToken::decode(token) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::debug!(error.cause_chain = ?e, "Ignoring undecodable access token");
                    None
                }
            });
        let authenticated = token_parsed
            .as_ref()
            .is_some_and(|parsed| !parsed.is_expired_at(Utc::now()));
        Self {
            settings,
            token_parsed,
            authenticated,
        }
    }

    pub fn authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn token_parsed(&self) -> Option<&ParsedToken> {
        self.token_parsed.as_ref()
    }

    pub fn preferred_username(&self) -> Option<&str> {
        self.token_parsed()?.preferred_username.as_deref()
    }

    /// Authorization endpoint the browser is sent to for the delegated login.
    pub fn create_login_url(&self, redirect_uri: &str) -> Result<Url, anyhow::Error> {
        let endpoint = format!(
            "{}/realms/{}/protocol/openid-connect/auth",
            self.settings.url.trim_end_matches('/'),
            urlencoding::encode(&self.settings.realm),
        );
        let mut url = Url::parse(&endpoint)
            .with_context(|| format!("{} is not a valid provider url", endpoint))?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.settings.client_id)
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("state", &Uuid::new_v4().to_string())
            .append_pair("response_mode", "fragment")
            .append_pair("response_type", "code")
            .append_pair("scope", "openid")
            .append_pair("nonce", &Uuid::new_v4().to_string());
        Ok(url)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for IdentitySession
where
    KeycloakSettings: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let persistor = SsrCookies::new(parse_cookies(Some(&parts.headers)));
        Ok(IdentitySession::restore(
            KeycloakSettings::from_ref(state),
            &persistor,
        ))
    }
}
