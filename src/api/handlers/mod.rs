use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::ENDPOINTS;
use crate::models::*;
use crate::upstream::{UpstreamError, Upstreams};

// ============================================================
// Error Handling
// ============================================================

/// Log an upstream failure and turn it into a 500 carrying the error text.
fn upstream_error(e: UpstreamError) -> (StatusCode, String) {
    tracing::error!(error = %e, "Upstream call failed");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// Same as [`upstream_error`], with a JSON `{"error": ..}` body.
fn upstream_error_json(e: UpstreamError) -> (StatusCode, Json<serde_json::Value>) {
    let (status, message) = upstream_error(e);
    (status, Json(serde_json::json!({ "error": message })))
}

// ============================================================
// Directory
// ============================================================

pub async fn root() -> Json<BTreeMap<&'static str, &'static str>> {
    Json(ENDPOINTS.iter().copied().collect())
}

// ============================================================
// Launch catalog
// ============================================================

pub async fn latest_launch(
    State(upstreams): State<Upstreams>,
) -> Result<Json<Launch>, (StatusCode, String)> {
    upstreams
        .catalog
        .latest_launch()
        .await
        .map(Json)
        .map_err(upstream_error)
}

#[derive(Debug, Deserialize)]
pub struct RocketQuery {
    pub id: Option<String>,
}

pub async fn rocket(
    State(upstreams): State<Upstreams>,
    Query(query): Query<RocketQuery>,
) -> Result<Json<Rocket>, (StatusCode, String)> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or((StatusCode::BAD_REQUEST, "rocket ID is required".to_string()))?;

    upstreams
        .catalog
        .rocket(&id)
        .await
        .map(Json)
        .map_err(upstream_error)
}

pub async fn list_rockets(
    State(upstreams): State<Upstreams>,
) -> Result<Json<Vec<RocketSummary>>, (StatusCode, String)> {
    upstreams
        .catalog
        .rocket_summaries()
        .await
        .map(Json)
        .map_err(upstream_error)
}

// ============================================================
// Trivia and astronomy
// ============================================================

pub async fn numbers(
    State(upstreams): State<Upstreams>,
) -> Result<Json<MathFact>, (StatusCode, String)> {
    upstreams
        .numbers
        .math_fact()
        .await
        .map(Json)
        .map_err(upstream_error)
}

pub async fn nasa(
    State(upstreams): State<Upstreams>,
) -> Result<Json<Apod>, (StatusCode, Json<serde_json::Value>)> {
    upstreams
        .pictures
        .picture_of_the_day()
        .await
        .map(Json)
        .map_err(upstream_error_json)
}
