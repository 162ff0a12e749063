use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt::Debug;
use tracing::debug;

/// Where the raw forecast payload comes from.
///
/// The payload is fetched once at startup; interpretation of its
/// contents belongs to the ingestion pipeline, so implementations
/// only promise "some JSON" back.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self) -> Result<Value>;
}

/// Fetches the payload from the forecast HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpForecastSource {
    endpoint: String,
    http: Client,
}

impl HttpForecastSource {
    #[must_use]
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: Client::new(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ForecastSource for HttpForecastSource {
    async fn fetch(&self) -> Result<Value> {
        debug!(endpoint = %self.endpoint, "fetching forecast payload");

        let res = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", self.endpoint))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse forecast response as JSON")
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
