use async_trait::async_trait;
use tonic::transport::Channel;

use super::{ClientError, ServiceClient};
use crate::grpc::proto::{
    launch_service_client::LaunchServiceClient, GetMathFactRequest, GetRocketRequest,
    GetRocketsRequest, LatestLaunchRequest,
};
use crate::models::*;

/// Client for the gRPC surface.
#[derive(Debug, Clone)]
pub struct GrpcServiceClient {
    inner: LaunchServiceClient<Channel>,
}

impl GrpcServiceClient {
    /// Connect to a `LaunchService` endpoint such as `http://127.0.0.1:50051`.
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let inner = LaunchServiceClient::connect(endpoint.into()).await?;
        Ok(Self { inner })
    }
}

// Generated client methods take `&mut self`; clones share one channel.
#[async_trait]
impl ServiceClient for GrpcServiceClient {
    async fn latest_launch(&self) -> Result<Launch, ClientError> {
        let response = self.inner.clone().get_latest_launch(LatestLaunchRequest {}).await?;
        Ok(response.into_inner().into())
    }

    async fn rocket(&self, id: &str) -> Result<Rocket, ClientError> {
        let request = GetRocketRequest { id: id.to_string() };
        let response = self.inner.clone().get_rocket(request).await?;
        Ok(response.into_inner().into())
    }

    async fn rockets(&self) -> Result<Vec<RocketSummary>, ClientError> {
        let response = self.inner.clone().get_rockets(GetRocketsRequest {}).await?;
        Ok(response
            .into_inner()
            .rockets
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn math_fact(&self) -> Result<MathFact, ClientError> {
        let response = self.inner.clone().get_math_fact(GetMathFactRequest {}).await?;
        Ok(response.into_inner().into())
    }
}
