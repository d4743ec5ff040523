use anyhow::Context;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Claims of an access token that the login page cares about. Every field is
/// optional; providers are free to omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParsedToken {
    pub sub: Option<String>,
    pub exp: Option<i64>,
    pub email: Option<String>,
    pub preferred_username: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

impl ParsedToken {
    /// Decodes the payload segment of a compact JWT.
    ///
    /// The signature is not checked: the result is only ever displayed, the
    /// token itself is verified by whoever it is presented to.
    pub fn decode(token: &str) -> Result<ParsedToken, anyhow::Error> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_)) => payload,
            _ => anyhow::bail!("Token is not made of three segments"),
        };
        let payload = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .context("Token payload is not valid base64url")?;
        serde_json::from_slice(&payload).context("Token payload is not a JSON object")
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.exp {
            Some(exp) => exp <= now.timestamp(),
            None => false,
        }
    }
}
