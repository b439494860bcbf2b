//! Clients for the third-party APIs this service aggregates.
//!
//! Each client owns a base URL and a clone of the process-wide
//! [`reqwest::Client`], issues exactly one GET per operation and decodes the
//! JSON body into a record from [`crate::models`]. There are no retries and
//! no caching: a failed call fails once.
//!
//! Handlers depend on the capability traits ([`LaunchCatalog`], [`MathFacts`],
//! [`AstronomyPictures`]) rather than on the concrete clients, so tests can
//! substitute in-memory fakes.

mod nasa;
mod numbers;
mod spacex;

pub use nasa::NasaClient;
pub use numbers::NumbersClient;
pub use spacex::SpaceXClient;

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, IntoUrl, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::*;

/// Upstream call failures.
///
/// Transport errors carry no request URL: the astronomy API key rides in the
/// query string.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection refused, DNS failure, timeout, or a body that could not be read.
    #[error("request to {host} failed: {source}")]
    Transport {
        host: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{host} returned HTTP {status}")]
    Status { host: String, status: StatusCode },

    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid upstream URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Only produced by the astronomy API, via HTTP 429 or an exhausted
    /// `X-RateLimit-Remaining` header.
    #[error("NASA API rate limit exceeded")]
    RateLimited { status: StatusCode },
}

impl UpstreamError {
    /// HTTP status reported by the upstream service, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } | Self::RateLimited { status } => Some(*status),
            Self::Transport { source, .. } => source.status(),
            Self::Decode(_) | Self::InvalidUrl { .. } => None,
        }
    }
}

/// Spaceflight launch and rocket catalog.
#[async_trait]
pub trait LaunchCatalog: Send + Sync {
    async fn latest_launch(&self) -> Result<Launch, UpstreamError>;

    async fn rocket(&self, id: &str) -> Result<Rocket, UpstreamError>;

    /// Every rocket in the catalog, projected to id and name.
    async fn rocket_summaries(&self) -> Result<Vec<RocketSummary>, UpstreamError>;
}

/// Math trivia source.
#[async_trait]
pub trait MathFacts: Send + Sync {
    async fn math_fact(&self) -> Result<MathFact, UpstreamError>;
}

/// Astronomy picture-of-the-day source.
#[async_trait]
pub trait AstronomyPictures: Send + Sync {
    async fn picture_of_the_day(&self) -> Result<Apod, UpstreamError>;
}

/// Build the HTTP client shared by every upstream client.
pub fn http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}

/// Send a request, logging the round trip.
///
/// Response headers starting with `x-` are logged for observability only.
/// Any response, whatever its status, is returned as `Ok`.
pub(crate) async fn send(client: &Client, request: RequestBuilder) -> Result<Response, UpstreamError> {
    let request = request.build().map_err(|source| UpstreamError::Transport {
        host: source
            .url()
            .and_then(|u| u.host_str())
            .unwrap_or_default()
            .to_string(),
        source: source.without_url(),
    })?;

    let method = request.method().clone();
    let host = request.url().host_str().unwrap_or_default().to_string();
    let start = Instant::now();

    match client.execute(request).await {
        Ok(response) => {
            let latency = start.elapsed();

            for (name, value) in response.headers() {
                if name.as_str().starts_with(['x', 'X']) {
                    tracing::debug!(header = %name, value = ?value, "X-Header found");
                }
            }

            tracing::info!(
                method = %method,
                host = %host,
                status = response.status().as_u16(),
                latency_ms = latency.as_millis() as u64,
                "Outbound"
            );
            Ok(response)
        }
        Err(source) => {
            let source = source.without_url();
            tracing::error!(
                method = %method,
                host = %host,
                latency_ms = start.elapsed().as_millis() as u64,
                error = %source,
                "Outbound request failed"
            );
            Err(UpstreamError::Transport { host, source })
        }
    }
}

/// Check the status and decode a JSON body.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamError> {
    let host = response.url().host_str().unwrap_or_default().to_string();
    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status { host, status });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| UpstreamError::Transport {
            host,
            source: source.without_url(),
        })?;
    Ok(serde_json::from_slice(&body)?)
}

/// GET `url` and decode the JSON response.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &Client, url: impl IntoUrl) -> Result<T, UpstreamError> {
    let response = send(client, client.get(url)).await?;
    decode(response).await
}

fn trim_base(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}

/// The upstream capabilities shared by both front ends.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct Upstreams {
    pub catalog: Arc<dyn LaunchCatalog>,
    pub numbers: Arc<dyn MathFacts>,
    pub pictures: Arc<dyn AstronomyPictures>,
}

impl Upstreams {
    pub fn new(
        catalog: impl LaunchCatalog + 'static,
        numbers: impl MathFacts + 'static,
        pictures: impl AstronomyPictures + 'static,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            numbers: Arc::new(numbers),
            pictures: Arc::new(pictures),
        }
    }

    /// Build the real upstream clients from configuration.
    pub fn from_config(config: &crate::config::ServerConfig) -> reqwest::Result<Self> {
        let client = http_client(config.upstream_timeout)?;
        Ok(Self::new(
            SpaceXClient::new(client.clone(), &config.spacex_url),
            NumbersClient::new(client.clone(), &config.numbers_url),
            NasaClient::new(client, &config.nasa_url, &config.nasa_api_key),
        ))
    }
}
