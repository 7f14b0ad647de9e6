use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use std::time::Duration;
use tokio::time::{sleep, Instant};

use crate::config::ScraperSettings;

/// HTTP client that spaces out consecutive requests to the ranking site
pub struct PacedClient {
    client: Client,
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl PacedClient {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            min_interval: Duration::from_millis(settings.rate_limit_ms),
            last_request: None,
        })
    }

    /// Fetch a page body as text, failing on non-success status
    pub async fn get_text(&mut self, url: &str) -> Result<String> {
        self.pace().await;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch from: {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error {} for {}", response.status(), url);
        }

        response.text().await.context("Failed to read response body")
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn pace(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!("Waiting {:?} before next request", wait);
                sleep(wait).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}
