//! Drives virtual users against the target URL and collects samples.

use std::time::{Duration, Instant};

use tokio::task::JoinSet;

use crate::config::LoadConfig;
use crate::report::{Sample, Summary};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Virtual user task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("No requests were issued during the run")]
    NoSamples,
}

/// Run the configured load profile and summarise the latencies.
pub async fn run(config: &LoadConfig) -> Result<Summary, LoadError> {
    // Timings must reflect the target alone, so environment proxies are ignored.
    let client = reqwest::Client::builder().no_proxy().build()?;
    let started = Instant::now();

    let mut users = JoinSet::new();
    for vu in 0..config.profile.vus {
        let (start, stop) = config.profile.window(vu);
        let client = client.clone();
        let url = config.target_url.clone();
        let pause = config.pause;

        users.spawn(async move {
            tokio::time::sleep_until((started + start).into()).await;
            virtual_user(vu, &client, &url, started + stop, pause).await
        });
    }

    let mut samples = Vec::new();
    while let Some(result) = users.join_next().await {
        samples.extend(result?);
    }

    tracing::info!(
        requests = samples.len(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "Load run finished",
    );

    Summary::from_samples(&samples, config.p95_threshold).ok_or(LoadError::NoSamples)
}

/// Issue requests until `deadline`, pausing between them.
async fn virtual_user(
    vu: u32,
    client: &reqwest::Client,
    url: &str,
    deadline: Instant,
    pause: Duration,
) -> Vec<Sample> {
    let mut samples = Vec::new();

    while Instant::now() < deadline {
        let sent = Instant::now();
        let status = match client.get(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                // Read the body so the timing covers the full response.
                match response.bytes().await {
                    Ok(_) => Some(status),
                    Err(err) => {
                        tracing::warn!(vu, error = %err, "Body read failed");
                        None
                    }
                }
            }
            Err(err) => {
                tracing::warn!(vu, error = %err, "Request failed");
                None
            }
        };
        samples.push(Sample {
            elapsed: sent.elapsed(),
            status,
        });

        tokio::time::sleep(pause).await;
    }

    tracing::debug!(vu, requests = samples.len(), "Virtual user done");
    samples
}
