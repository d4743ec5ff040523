use anyhow::Context;
use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::Key;
use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    configuration::{KeycloakSettings, Settings},
    login_client::LoginClient,
    routes::{delegated_login, health_check, login_page, submit_login},
    telemetry::make_request_span,
};

/// Public address the identity provider sends the browser back to.
#[derive(Clone, Debug)]
pub struct ApplicationBaseUrl(pub String);

#[derive(Clone, FromRef)]
pub struct AppState {
    pub login_client: LoginClient,
    pub keycloak: KeycloakSettings,
    pub base_url: ApplicationBaseUrl,
    pub cookie_key: Key,
}

pub struct Application {
    port: u16,
    addr: String,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let login_client =
            LoginClient::new(&config.backend.login_url, config.backend.timeout())?;
        let cookie_key = Key::try_from(config.application.hmac_secret.expose_secret().as_bytes())
            .map_err(|_| anyhow::anyhow!("The hmac secret must be at least 64 bytes long"))?;
        let state = AppState {
            login_client,
            keycloak: config.keycloak,
            base_url: ApplicationBaseUrl(config.application.base_url),
            cookie_key,
        };

        let bind_addr = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("Unable to bind to {}", bind_addr))?;
        let local_addr = listener.local_addr()?;

        Ok(Self {
            port: local_addr.port(),
            addr: local_addr.ip().to_string(),
            listener,
            router: router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub async fn run_forever(self) -> Result<(), std::io::Error> {
        tracing::info!("Listening on {}:{}", self.addr, self.port);
        axum::serve(self.listener, self.router).await
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(login_page))
        .route("/login", post(submit_login))
        .route("/login/keycloak", get(delegated_login))
        .route("/health_check", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span)),
        )
        .with_state(state)
}
