use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{ClientError, ServiceClient};
use crate::models::*;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the JSON HTTP surface.
#[derive(Debug, Clone)]
pub struct HttpServiceClient {
    base_url: String,
    client: Client,
}

impl HttpServiceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Decode a 200 response; anything else becomes [`ClientError::Server`].
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status == reqwest::StatusCode::OK {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Server(format!("{}: {}", status, body.trim())))
        }
    }
}

#[async_trait]
impl ServiceClient for HttpServiceClient {
    async fn latest_launch(&self) -> Result<Launch, ClientError> {
        self.get("/api/latest-launch", &[]).await
    }

    async fn rocket(&self, id: &str) -> Result<Rocket, ClientError> {
        self.get("/api/rocket", &[("id", id)]).await
    }

    async fn rockets(&self) -> Result<Vec<RocketSummary>, ClientError> {
        self.get("/api/rockets", &[]).await
    }

    async fn math_fact(&self) -> Result<MathFact, ClientError> {
        self.get("/api/numbers", &[]).await
    }
}
