use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A trivia entry from the numbers service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathFact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: i64,
    /// Whether the service had a fact for `number`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub found: bool,
    /// Category tag, e.g. `"math"`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}
