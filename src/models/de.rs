//! Lenient field decoders for rows coming from the hosted services.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_string<E: Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(E::custom(format!("expected string or number, got {}", other))),
    }
}

/// Identifiers may be uuids (strings) or serial ids (numbers).
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_string(value)?.ok_or_else(|| D::Error::custom("identifier is null"))
}

pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_string(value)
}
