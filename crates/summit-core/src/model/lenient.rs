//! Forgiving decoders for editor-authored payloads.
//!
//! Field shapes in a document's `data` depend on how editors filled in
//! the custom type, so a malformed entry decodes to its default instead
//! of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a list whose elements each fall back to `T::default()`.
///
/// Anything other than an array (including `null`) is an empty list.
/// The element count is always preserved.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().map(or_default).collect(),
        _ => Vec::new(),
    })
}

/// Decode a value, falling back to `T::default()` when it does not fit.
pub(crate) fn value<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(or_default(Value::deserialize(deserializer)?))
}

fn or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_default()
}
