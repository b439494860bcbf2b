mod handlers;
pub mod middleware;

use axum::{routing::get, Router};
use tokio::net::TcpListener;

use crate::upstream::Upstreams;

/// Every route served over HTTP, with the description returned by `/`.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("/", "Shows this list of available endpoints"),
    ("/api/latest-launch", "Get the latest SpaceX launch"),
    ("/api/rocket", "Get a specific rocket by ID (use ?id=[rocket_id])"),
    ("/api/rockets", "Get a list of all SpaceX rockets"),
    ("/api/numbers", "Get a random math fact"),
    ("/api/nasa", "Get NASA's Astronomy Picture of the Day"),
];

pub fn create_router(upstreams: Upstreams) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/latest-launch", get(handlers::latest_launch))
        .route("/api/rocket", get(handlers::rocket))
        .route("/api/rockets", get(handlers::list_rockets))
        .route("/api/numbers", get(handlers::numbers))
        .route("/api/nasa", get(handlers::nasa))
        .layer(axum::middleware::from_fn(middleware::log_request))
        .with_state(upstreams)
}

/// Serve the HTTP front end on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, upstreams: Upstreams) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("HTTP server listening on http://{}", addr);
    }
    axum::serve(listener, create_router(upstreams)).await
}
