//! gRPC front end exposing the launch catalog and math trivia as
//! `outerspace.v1.LaunchService`.
//!
//! The service delegates to the same [`Upstreams`] as the HTTP handlers; the
//! two front ends are different serializations of the same operations.

pub mod proto {
    //! Generated protobuf types and service stubs.
    tonic::include_proto!("outerspace.v1");
}

mod convert;
mod service;

pub use convert::upstream_status;
pub use service::LaunchServiceImpl;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tower_http::trace::TraceLayer;

use crate::upstream::Upstreams;

/// Serve the gRPC front end on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, upstreams: Upstreams) -> Result<(), tonic::transport::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("gRPC server listening on {}", addr);
    }

    tonic::transport::Server::builder()
        .layer(TraceLayer::new_for_grpc())
        .add_service(LaunchServiceImpl::new(&upstreams).into_server())
        .serve_with_incoming(TcpListenerStream::new(listener))
        .await
}
