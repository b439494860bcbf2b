//! Clients for this service's own HTTP and gRPC surfaces, plus the polling
//! loop behind the `client` command.
//!
//! Configuration is via [`crate::config::ClientConfig`]:
//! - `HTTP_SERVER_ADDR` - HTTP base URL
//! - `GRPC_SERVER_ADDR` - gRPC endpoint
//! - `POLL_INTERVAL` - delay between cycles

mod grpc;
mod http;
mod poll;

pub use grpc::GrpcServiceClient;
pub use http::HttpServiceClient;
pub use poll::{poll, run_cycle, CycleReport};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::*;

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("gRPC connection failed: {0}")]
    Connect(#[from] tonic::transport::Error),

    #[error("RPC failed: {0}")]
    Rpc(Box<tonic::Status>),
}

impl From<tonic::Status> for ClientError {
    fn from(status: tonic::Status) -> Self {
        Self::Rpc(Box::new(status))
    }
}

/// The four operations exposed by both front ends.
#[async_trait]
pub trait ServiceClient: Send + Sync {
    async fn latest_launch(&self) -> Result<Launch, ClientError>;

    async fn rocket(&self, id: &str) -> Result<Rocket, ClientError>;

    async fn rockets(&self) -> Result<Vec<RocketSummary>, ClientError>;

    async fn math_fact(&self) -> Result<MathFact, ClientError>;
}
