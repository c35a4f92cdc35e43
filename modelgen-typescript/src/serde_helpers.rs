//! Serde helpers for the lenient declarative input format.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Deserialize a list whose slots may be `null`, substituting defaults.
pub(crate) fn defaulting_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items: Vec<Option<T>> = Vec::deserialize(deserializer)?;
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

/// Deserialize a string field that may be given as a bare scalar
/// (`1`, `true`) in the declarative input.
pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

/// Like [`scalar_string`] but `null` maps to `None`.
pub(crate) fn optional_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(scalar_to_string(other)),
    })
}

/// Deserialize a list of scalars into strings, tolerating `null` slots.
pub(crate) fn scalar_string_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Vec<Value> = Vec::deserialize(deserializer)?;
    Ok(items.into_iter().map(scalar_to_string).collect())
}
