//! Translation between local records and protobuf messages.
//!
//! Field widths match on both sides, so every conversion is a plain move.

use tonic::Status;

use super::proto;
use crate::models;
use crate::upstream::UpstreamError;

impl From<models::Launch> for proto::Launch {
    fn from(launch: models::Launch) -> Self {
        Self {
            flight_number: launch.flight_number,
            mission_name: launch.mission_name,
            date_utc: launch.date_utc,
            success: launch.success,
            details: launch.details,
        }
    }
}

impl From<proto::Launch> for models::Launch {
    fn from(launch: proto::Launch) -> Self {
        Self {
            flight_number: launch.flight_number,
            mission_name: launch.mission_name,
            date_utc: launch.date_utc,
            success: launch.success,
            details: launch.details,
        }
    }
}

impl From<models::Rocket> for proto::Rocket {
    fn from(rocket: models::Rocket) -> Self {
        Self {
            id: rocket.id,
            name: rocket.name,
            description: rocket.description,
            height_meters: rocket.height.meters,
            mass_kg: rocket.mass.kg,
        }
    }
}

impl From<proto::Rocket> for models::Rocket {
    fn from(rocket: proto::Rocket) -> Self {
        Self {
            id: rocket.id,
            name: rocket.name,
            description: rocket.description,
            height: models::Height {
                meters: rocket.height_meters,
            },
            mass: models::Mass { kg: rocket.mass_kg },
        }
    }
}

impl From<models::RocketSummary> for proto::RocketSummary {
    fn from(summary: models::RocketSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
        }
    }
}

impl From<proto::RocketSummary> for models::RocketSummary {
    fn from(summary: proto::RocketSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
        }
    }
}

impl From<models::MathFact> for proto::MathFact {
    fn from(fact: models::MathFact) -> Self {
        Self {
            text: fact.text,
            number: fact.number,
            found: fact.found,
            r#type: fact.kind,
        }
    }
}

impl From<proto::MathFact> for models::MathFact {
    fn from(fact: proto::MathFact) -> Self {
        Self {
            text: fact.text,
            number: fact.number,
            found: fact.found,
            kind: fact.r#type,
        }
    }
}

/// Map an upstream failure to an RPC status carrying the upstream error text.
pub fn upstream_status(e: UpstreamError) -> Status {
    tracing::error!(error = %e, "Upstream call failed");
    let message = e.to_string();
    match e {
        UpstreamError::Transport { .. } => Status::unavailable(message),
        UpstreamError::RateLimited { .. } => Status::resource_exhausted(message),
        UpstreamError::Status { .. } | UpstreamError::Decode(_) | UpstreamError::InvalidUrl { .. } => {
            Status::internal(message)
        }
    }
}
