use anyhow::Context;

use login_page::telemetry::{get_subscriber, init_subscriber};
use login_page::{configuration::get_config, startup::Application};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("login-page".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;
    let config = get_config().context("Failed to read configuration")?;
    let application = Application::build(config)
        .await
        .context("Failed to build the application")?;
    application.run_forever().await?;
    Ok(())
}
