use std::time::Duration;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use login_page::{
    configuration::get_config,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".into();
    let subscriber_name = "test".into();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialize tracing");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialize tracing");
    }
});

/// Backend timeout used by every test app, short enough to exercise it.
pub const BACKEND_TIMEOUT: Duration = Duration::from_millis(500);

pub struct TestApp {
    pub addr: String,
    pub base_url: String,
    pub backend_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(format!("{}/login", self.addr))
            .form(body)
            .send()
            .await
            .expect("Failed to send the request")
    }

    pub async fn get_login_page(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/", self.addr))
            .send()
            .await
            .expect("Failed to send the request")
    }

    pub async fn get_login_html(&self) -> String {
        self.get_login_page().await.text().await.unwrap()
    }

    /// Fetches the page with a hand-written `Cookie` header, outside of the
    /// shared cookie store.
    pub async fn get_login_html_with_cookie(&self, cookie: &str) -> String {
        reqwest::Client::new()
            .get(format!("{}/", self.addr))
            .header("Cookie", cookie)
            .send()
            .await
            .expect("Failed to send the request")
            .text()
            .await
            .unwrap()
    }

    pub async fn get_delegated_login(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/login/keycloak", self.addr))
            .send()
            .await
            .expect("Failed to send the request")
    }

    pub async fn get_health_check(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/health_check", self.addr))
            .timeout(Duration::from_secs(1))
            .send()
            .await
            .expect("Failed to send the request")
    }
}

pub fn assert_is_redirected_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}

/// An unsigned compact JWT carrying `claims`.
pub fn token_with_claims(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);
    let backend_server = MockServer::start().await;

    // Randomise configuration to ensure test isolation
    let configuration = {
        let mut c = get_config().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.backend.login_url = format!("{}/api/v1/login", backend_server.uri());
        c.backend.timeout_millis = BACKEND_TIMEOUT.as_millis() as u64;
        c
    };
    let base_url = configuration.application.base_url.clone();

    let app = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let addr = format!("http://{}:{}", app.addr(), app.port());
    let _ = tokio::spawn(app.run_forever());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        addr,
        base_url,
        backend_server,
        api_client,
    }
}
