use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::{decode, send, trim_base, AstronomyPictures, UpstreamError};
use crate::models::Apod;

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Client for the NASA Astronomy Picture of the Day API.
///
/// The API key is sent as the `api_key` query parameter and is never logged.
#[derive(Clone)]
pub struct NasaClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl NasaClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url),
            api_key: api_key.into(),
            client,
        }
    }
}

impl std::fmt::Debug for NasaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NasaClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl AstronomyPictures for NasaClient {
    async fn picture_of_the_day(&self) -> Result<Apod, UpstreamError> {
        let request = self
            .client
            .get(format!("{}/planetary/apod", self.base_url))
            .query(&[("api_key", self.api_key.as_str())]);
        let response = send(&self.client, request).await?;

        let status = response.status();
        let quota_exhausted = response
            .headers()
            .get(RATE_LIMIT_REMAINING)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|remaining| remaining.trim() == "0");

        // Checked before the generic status check so 429 is not reported as a plain HTTP error.
        if quota_exhausted || status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(status = status.as_u16(), "NASA API rate limit exceeded");
            return Err(UpstreamError::RateLimited { status });
        }

        decode(response).await
    }
}
