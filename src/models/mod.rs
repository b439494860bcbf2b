//! Records returned by the upstream APIs and re-exposed by this service.
//!
//! Every record is a flat value: decoded from an upstream response, handed to
//! the caller, then dropped. Field names follow the upstream JSON keys so the
//! HTTP surface mirrors what the upstream services return.
//!
//! - [`Launch`]: the most recent launch from the spaceflight catalog.
//! - [`Rocket`]: a full rocket record; [`RocketSummary`] is its id+name projection.
//! - [`MathFact`]: a random math trivia entry.
//! - [`Apod`]: the astronomy picture of the day.

mod apod;
mod launch;
mod math_fact;
mod rocket;

pub use apod::*;
pub use launch::*;
pub use math_fact::*;
pub use rocket::*;

use serde::{Deserialize, Deserializer};

/// Decodes a JSON `null` as the type's default instead of failing.
///
/// Upstreams use `null` for fields that were never filled in; every record
/// decodes them the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
