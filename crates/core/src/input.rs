//! Helpers for normalizing loosely-typed request input.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::types::DbId;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(DbId),
    Text(String),
}

/// Deserialize an optional id reference.
///
/// Accepts `null`, an integer, or a numeric string. An empty string means
/// "no value" and becomes `None`, so form-style submissions and query
/// strings such as `?category=` behave like an omitted field.
///
/// Use with `#[serde(default, deserialize_with = "deserialize_optional_id")]`.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Int(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<DbId>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid id '{text}'")))
        }
    }
}
