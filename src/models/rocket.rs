use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A rocket record from the spaceflight catalog.
///
/// Height and mass keep the catalog's nested `{"meters": ..}` / `{"kg": ..}`
/// shape. Missing or `null` fields decode to their defaults, so list entries
/// that only carry an id and a name still project to a [`RocketSummary`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: Height,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mass: Mass,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Height {
    #[serde(default, deserialize_with = "null_as_default")]
    pub meters: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mass {
    #[serde(default, deserialize_with = "null_as_default")]
    pub kg: i64,
}

/// Id and name of a rocket, as served by the rocket list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RocketSummary {
    pub id: String,
    pub name: String,
}

impl From<Rocket> for RocketSummary {
    fn from(rocket: Rocket) -> Self {
        Self {
            id: rocket.id,
            name: rocket.name,
        }
    }
}

impl From<&Rocket> for RocketSummary {
    fn from(rocket: &Rocket) -> Self {
        Self {
            id: rocket.id.clone(),
            name: rocket.name.clone(),
        }
    }
}

/// Projects full rocket records down to summaries, keeping catalog order.
pub fn summarize(rockets: Vec<Rocket>) -> Vec<RocketSummary> {
    rockets.into_iter().map(Into::into).collect()
}
