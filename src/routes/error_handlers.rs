use std::fmt::Debug;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};

use crate::login_form::AUTHENTICATION_FAILED;

#[derive(thiserror::Error)]
pub enum LoginError {
    #[error("{}", AUTHENTICATION_FAILED)]
    AuthError(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        match self {
            LoginError::AuthError(_) => Redirect::to("/").into_response(),
            LoginError::UnexpectedError(_) => {
                tracing::error!("Error in handler: {:?}", self);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by: \n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
