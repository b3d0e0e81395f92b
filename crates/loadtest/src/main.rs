//! `baseplate-loadtest` -- staged load run against one listing endpoint.
//!
//! Exits with status 1 when p95 latency reaches the threshold or any request
//! fails. With the defaults it targets the slow endpoint, which is expected to
//! fail; point `LOADTEST_URL` at `/api/posts/v2/fast` to see it pass.
//! See [`baseplate_loadtest::config::LoadConfig::from_env`] for variables.

use baseplate_loadtest::config::LoadConfig;
use baseplate_loadtest::runner;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "baseplate_loadtest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match LoadConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Invalid load test configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        url = %config.target_url,
        vus = config.profile.vus,
        duration_secs = config.profile.total().as_secs(),
        "Starting load run",
    );

    let summary = match runner::run(&config).await {
        Ok(summary) => summary,
        Err(err) => {
            tracing::error!(error = %err, "Load run failed");
            std::process::exit(1);
        }
    };

    if summary.passed() {
        tracing::info!(%summary, "Threshold met");
    } else {
        tracing::error!(%summary, "Threshold breached");
        std::process::exit(1);
    }
}
