use async_trait::async_trait;
use reqwest::Client;

use super::{get_json, trim_base, MathFacts, UpstreamError};
use crate::models::MathFact;

/// Client for the Numbers trivia API.
#[derive(Debug, Clone)]
pub struct NumbersClient {
    base_url: String,
    client: Client,
}

impl NumbersClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url),
            client,
        }
    }
}

#[async_trait]
impl MathFacts for NumbersClient {
    async fn math_fact(&self) -> Result<MathFact, UpstreamError> {
        get_json(&self.client, format!("{}/random/math?json", self.base_url)).await
    }
}
