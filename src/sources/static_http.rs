//! Static HTTP content source.
//!
//! One GET with a fixed User-Agent and a bounded timeout. Non-2xx statuses
//! and transport errors both abort the run; there is nothing to salvage from
//! an error page.

use crate::config::SourceConfig;
use crate::error::ScrapeError;
use crate::sources::ContentSource;
use tracing::{info, instrument};

/// Fetches server-rendered pages with `reqwest`.
pub struct StaticSource {
    client: reqwest::Client,
}

impl StaticSource {
    /// Build the HTTP client from the run configuration.
    pub fn new(config: &SourceConfig) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ScrapeError::Fetch {
                url: config.url.clone(),
                source: e,
            })?;
        Ok(Self { client })
    }
}

impl ContentSource for StaticSource {
    #[instrument(level = "info", skip_all, fields(url = %config.url))]
    async fn fetch(&self, config: &SourceConfig) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(&config.url)
            .send()
            .await
            .map_err(|e| ScrapeError::Fetch {
                url: config.url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: config.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ScrapeError::Fetch {
            url: config.url.clone(),
            source: e,
        })?;
        info!(bytes = body.len(), "Fetched listing page");
        Ok(body)
    }
}
