use std::time::Duration;

use anyhow::Context;
use axum::async_trait;
use reqwest::{Client, Url};
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::domain::{LoginEmail, LoginFormFields};

/// Whatever checks a pair of credentials. `Ok` means the backend accepted
/// them, any error means it did not; callers do not get to tell why.
#[async_trait]
pub trait LoginBackend: Send + Sync {
    async fn login(&self, fields: &LoginFormFields) -> Result<(), anyhow::Error>;
}

#[derive(Clone, Debug)]
pub struct LoginClient {
    http_client: Client,
    login_url: Url,
}

impl LoginClient {
    pub fn new(login_url: &str, timeout: Duration) -> Result<Self, anyhow::Error> {
        Ok(Self {
            http_client: Client::builder()
                .timeout(timeout)
                .build()
                .context("Failed to build the http client")?,
            login_url: Url::parse(login_url)
                .with_context(|| format!("{} is not a valid login url", login_url))?,
        })
    }
}

#[async_trait]
impl LoginBackend for LoginClient {
    #[tracing::instrument(
        name = "Post credentials to the login backend",
        skip(self, fields),
        fields(email = %fields.email)
    )]
    async fn login(&self, fields: &LoginFormFields) -> Result<(), anyhow::Error> {
        let request_body = LoginRequest {
            email: &fields.email,
            password: fields.password.expose_secret(),
        };
        self.http_client
            .post(self.login_url.clone())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a LoginEmail,
    password: &'a str,
}
