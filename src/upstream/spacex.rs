use async_trait::async_trait;
use reqwest::{Client, Url};

use super::{get_json, trim_base, LaunchCatalog, UpstreamError};
use crate::models::{summarize, Launch, Rocket, RocketSummary};

/// Client for the SpaceX v4 REST API.
#[derive(Debug, Clone)]
pub struct SpaceXClient {
    base_url: String,
    client: Client,
}

impl SpaceXClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/rockets/{id}` with `id` percent-encoded as a single path segment.
    fn rocket_url(&self, id: &str) -> Result<Url, UpstreamError> {
        let invalid = |reason: String| UpstreamError::InvalidUrl {
            url: self.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot be a base".into()))?
            .pop_if_empty()
            .push("rockets")
            .push(id);
        Ok(url)
    }

    /// All rockets with every field the catalog returns.
    pub async fn rockets(&self) -> Result<Vec<Rocket>, UpstreamError> {
        get_json(&self.client, format!("{}/rockets", self.base_url)).await
    }
}

#[async_trait]
impl LaunchCatalog for SpaceXClient {
    async fn latest_launch(&self) -> Result<Launch, UpstreamError> {
        get_json(&self.client, format!("{}/launches/latest", self.base_url)).await
    }

    async fn rocket(&self, id: &str) -> Result<Rocket, UpstreamError> {
        get_json(&self.client, self.rocket_url(id)?).await
    }

    async fn rocket_summaries(&self) -> Result<Vec<RocketSummary>, UpstreamError> {
        self.rockets().await.map(summarize)
    }
}
