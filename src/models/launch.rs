use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A single launch from the spaceflight catalog.
///
/// `date_utc` is kept in its ISO-8601 lexical form; it is never parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    #[serde(default, deserialize_with = "null_as_default")]
    pub flight_number: i64,
    /// Mission name. The catalog calls this field `name`.
    #[serde(rename = "name", default, deserialize_with = "null_as_default")]
    pub mission_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_utc: String,
    /// `false` both for failed launches and for launches with no outcome yet.
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: String,
}
