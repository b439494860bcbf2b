//! Request logging applied to every HTTP route.

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Log method, path, query, status and latency once the handler has finished.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        query = %query,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Inbound"
    );
    response
}
