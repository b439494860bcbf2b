use std::sync::Arc;

use tonic::{Request, Response, Status};

use super::convert::upstream_status;
use super::proto::launch_service_server::{LaunchService, LaunchServiceServer};
use super::proto::*;
use crate::upstream::{LaunchCatalog, MathFacts, Upstreams};

/// Implementation of the `LaunchService` gRPC service.
pub struct LaunchServiceImpl {
    catalog: Arc<dyn LaunchCatalog>,
    numbers: Arc<dyn MathFacts>,
}

impl LaunchServiceImpl {
    pub fn new(upstreams: &Upstreams) -> Self {
        Self {
            catalog: upstreams.catalog.clone(),
            numbers: upstreams.numbers.clone(),
        }
    }

    pub fn into_server(self) -> LaunchServiceServer<Self> {
        LaunchServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl LaunchService for LaunchServiceImpl {
    async fn get_latest_launch(
        &self,
        _request: Request<LatestLaunchRequest>,
    ) -> Result<Response<Launch>, Status> {
        let launch = self.catalog.latest_launch().await.map_err(upstream_status)?;
        Ok(Response::new(launch.into()))
    }

    async fn get_rocket(
        &self,
        request: Request<GetRocketRequest>,
    ) -> Result<Response<Rocket>, Status> {
        let req = request.into_inner();
        if req.id.is_empty() {
            return Err(Status::invalid_argument("rocket ID is required"));
        }

        let rocket = self.catalog.rocket(&req.id).await.map_err(upstream_status)?;
        Ok(Response::new(rocket.into()))
    }

    async fn get_rockets(
        &self,
        _request: Request<GetRocketsRequest>,
    ) -> Result<Response<GetRocketsResponse>, Status> {
        let rockets = self
            .catalog
            .rocket_summaries()
            .await
            .map_err(upstream_status)?;

        Ok(Response::new(GetRocketsResponse {
            rockets: rockets.into_iter().map(Into::into).collect(),
        }))
    }

    async fn get_math_fact(
        &self,
        _request: Request<GetMathFactRequest>,
    ) -> Result<Response<MathFact>, Status> {
        let fact = self.numbers.math_fact().await.map_err(upstream_status)?;
        Ok(Response::new(fact.into()))
    }
}
