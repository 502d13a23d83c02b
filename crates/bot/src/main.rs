use chrono::Utc;

use homework_bot::client::PracticumClient;
use homework_bot::poller::StatusPoller;
use homework_bot::telemetry;
use homework_common::config::AppConfig;
use homework_notifier::TelegramNotifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env first so RUST_LOG and LOG_FORMAT can come from it
    dotenvy::dotenv().ok();
    telemetry::init();

    tracing::info!("Homework bot starting...");

    // Missing credentials are fatal; nothing touches the network before this.
    let config = AppConfig::from_env()?;

    let client = PracticumClient::from_config(&config)?;
    let notifier = TelegramNotifier::from_config(&config)?;

    let mut poller = StatusPoller::new(
        client,
        notifier,
        config.retry_period,
        Utc::now().timestamp(),
    );

    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping...");
        }
    }

    tracing::info!("Homework bot stopped.");
    Ok(())
}
